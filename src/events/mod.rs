//! Event handling module.
//!
//! Terminal input is polled on a dedicated thread and forwarded to the UI
//! loop, where key presses are translated into state changes.

pub mod terminal;
