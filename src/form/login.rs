use super::debounce::Debouncer;
use super::field::{reduce, FieldAction, FieldKind, FieldState};
use crate::session::Credentials;
use log::*;
use std::time::{Duration, Instant};

/// Mounted email/password form.
///
/// Holds both field states and the published aggregate validity. Field
/// changes schedule a debounced recomputation of the aggregate; until it
/// fires the previously published value stays in effect.
///
#[derive(Debug)]
pub struct LoginForm {
    email: FieldState,
    password: FieldState,
    form_is_valid: bool,
    debouncer: Debouncer,
}

impl LoginForm {
    pub fn new(quiet_period: Duration) -> Self {
        debug!("Mounting login form...");
        LoginForm {
            email: FieldState::default(),
            password: FieldState::default(),
            form_is_valid: false,
            debouncer: Debouncer::new(quiet_period),
        }
    }

    pub fn field(&self, kind: FieldKind) -> &FieldState {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
        }
    }

    /// Run an action through the field's reducer and reschedule the
    /// aggregate recomputation if the field state changed.
    ///
    pub fn dispatch(&mut self, kind: FieldKind, action: FieldAction, now: Instant) {
        let slot = match kind {
            FieldKind::Email => &mut self.email,
            FieldKind::Password => &mut self.password,
        };
        let next = reduce(kind, slot, action);
        if next != *slot {
            *slot = next;
            self.debouncer.schedule(now);
        }
    }

    /// The aggregate validity as last published.
    ///
    pub fn is_valid(&self) -> bool {
        self.form_is_valid
    }

    /// When the pending recomputation is due, if any.
    ///
    pub fn recompute_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Recompute and publish the aggregate if the quiet period has elapsed.
    /// Returns the newly published value when a recomputation happened.
    ///
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        if !self.debouncer.fire_if_due(now) {
            return None;
        }
        self.form_is_valid = aggregate_validity(&[&self.email, &self.password]);
        debug!("Checking form validity: {}", self.form_is_valid);
        Some(self.form_is_valid)
    }

    /// Return the credentials to submit, or `None` while submission is
    /// disabled. The published aggregate gates submission, and the current
    /// field states must still agree with it.
    ///
    pub fn submission(&self) -> Option<Credentials> {
        if !self.form_is_valid || !aggregate_validity(&[&self.email, &self.password]) {
            return None;
        }
        Some(Credentials {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        })
    }

    /// Cancel any pending recomputation. Called on unmount.
    ///
    pub fn dispose(&mut self) {
        if self.debouncer.is_pending() {
            debug!("Cancelling pending form validity check");
        }
        self.debouncer.cancel();
    }
}

impl Drop for LoginForm {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// True only when every field has been evaluated and found valid.
///
pub fn aggregate_validity(fields: &[&FieldState]) -> bool {
    fields.iter().all(|field| field.is_valid == Some(true))
}
