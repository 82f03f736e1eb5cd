//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout (header, main view, footer, log panel)
//! - Theme management
//! - Widget components (input fields, styling)
//! - View rendering (login card, home screen)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::Theme;
