use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the screen shown with an active session.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Home")
        .border_style(styling::active_block_border_style(theme));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Welcome back!", styling::banner_style(theme))),
        Line::from(""),
    ];
    if let Some(message) = state.get_status_message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            styling::normal_text_style(theme),
        )));
    }

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(content, size);
}
