mod footer;
mod header;
mod home;
mod log;
mod login;
mod main;

use self::log::log;
use super::*;
use crate::state::State;
use footer::footer;
use header::header;
use main::main;
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log panel including its borders.
///
const LOG_PANEL_HEIGHT: u16 = 8;

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &State) {
    let log_height = if state.is_log_visible() {
        LOG_PANEL_HEIGHT
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(0),             // Main view
            Constraint::Length(log_height), // Log
            Constraint::Length(1),          // Footer
        ])
        .split(frame.size());

    header(frame, rows[0], state);
    main(frame, rows[1], state);
    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[3], state);
}
