//! Application state management module.
//!
//! This module contains the state owned by the event loop:
//! - Main `State` struct holding the mounted login form, focus and view
//! - Navigation types (View, Focus, NavItem)

mod navigation;
mod state_impl;

pub use navigation::{Focus, NavItem, View};
pub use state_impl::State;
