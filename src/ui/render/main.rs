use super::{home, login, Frame};
use crate::state::{State, View};
use ratatui::layout::Rect;

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &State) {
    match state.current_view() {
        View::Login => login::login(frame, size, state),
        View::Home => home::home(frame, size, state),
    }
}
