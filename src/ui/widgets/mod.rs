//! Reusable UI widget components.
//!
//! This module contains reusable widgets such as the labelled input field
//! and styling utilities.

pub mod input;
pub mod styling;
