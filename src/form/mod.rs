//! Login form state.
//!
//! This module contains the pieces that turn raw input into a submittable
//! form:
//! - Field state reducers and the validity predicates
//! - The debounce that delays publishing the aggregate validity
//! - `LoginForm`, which owns both fields and the debounce

mod debounce;
mod field;
mod login;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use field::{email_predicate, password_predicate, reduce, FieldAction, FieldKind, FieldState};
pub use login::{aggregate_validity, LoginForm};
