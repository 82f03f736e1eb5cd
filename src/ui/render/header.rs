use super::Frame;
use crate::state::{NavItem, State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "A Typical Page";

/// Render the header: the page title and, with an active session, the
/// navigation entries.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TITLE.len() as u16 + 2), Constraint::Min(0)])
        .split(inner);

    let title = Paragraph::new(Span::styled(TITLE, styling::banner_style(theme)));
    frame.render_widget(title, columns[0]);

    if let Some(navigation) = navigation(state) {
        frame.render_widget(navigation, columns[1]);
    }
}

/// Build the navigation line, or nothing without an active session.
///
fn navigation(state: &State) -> Option<Paragraph<'static>> {
    if !state.session().is_active() {
        return None;
    }
    let theme = state.get_theme();
    let on_home = state.current_view() == View::Home;
    let mut spans = vec![];
    for item in NavItem::ALL {
        let style = if on_home && item == state.current_nav_item() {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(format!(" {} ", item.label()), style));
        spans.push(Span::raw(" "));
    }
    Some(Paragraph::new(Line::from(spans)).alignment(Alignment::Right))
}
