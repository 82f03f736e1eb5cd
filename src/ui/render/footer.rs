use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the key hints for the current view.
///
fn hints(view: View) -> &'static str {
    match view {
        View::Login => " Tab/Shift+Tab: move focus  Enter: submit  F2: toggle log  Ctrl+C: quit",
        View::Home => " ←/→: navigate  Enter: open  o: sign out  F2: toggle log  q: quit",
    }
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let paragraph = Paragraph::new(hints(state.current_view()))
        .style(styling::muted_text_style(state.get_theme()));
    frame.render_widget(paragraph, size);
}
