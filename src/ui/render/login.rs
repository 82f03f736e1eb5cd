use super::Frame;
use crate::form::FieldKind;
use crate::state::{Focus, State};
use crate::ui::widgets::{input::input, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 13;

/// Render the login card according to state.
///
pub fn login(frame: &mut Frame, size: Rect, state: &State) {
    let form = match state.get_form() {
        Some(form) => form,
        None => return,
    };
    let theme = state.get_theme();
    let card = centered(size, CARD_WIDTH, CARD_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Sign in")
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let focus = state.current_focus();
    for (row, kind) in [(rows[0], FieldKind::Email), (rows[1], FieldKind::Password)] {
        let focused = focus.field() == Some(kind);
        frame.render_widget(input(kind, form.field(kind), focused, theme), row);
    }

    let enabled = state.can_submit();
    let button = Paragraph::new("[ Login ]")
        .alignment(Alignment::Center)
        .style(styling::button_style(theme, enabled, focus == Focus::Submit));
    frame.render_widget(button, rows[3]);
}

/// Return a rectangle of at most the given size centered within `area`.
///
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
