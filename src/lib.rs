//! Terminal login demo.
//!
//! A single-screen TUI with an email/password form whose fields are driven
//! by pure reducers, a debounced form-validity check gating submission, and
//! a session store that persists the "logged in" flag and broadcasts changes
//! to every consumer holding a handle to it.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod logger;
pub mod session;
pub mod state;
pub mod storage;
pub mod ui;
