//! Field state and the reducer that drives it.
//!
//! Each tracked input owns a `FieldState`. Every change goes through
//! [`reduce`], which replaces the state wholesale so the stored validity can
//! never lag behind the stored value.

// Exclusive lower bound on trimmed password length.
const PASSWORD_MIN_EXCLUSIVE: usize = 6;

/// Value and validity of a single form input.
///
/// `is_valid` stays `None` until the field has been evaluated once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: Option<bool>,
}

impl FieldState {
    /// Whether the field has been evaluated and found invalid.
    ///
    pub fn is_invalid(&self) -> bool {
        self.is_valid == Some(false)
    }
}

/// Actions a field reducer understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldAction {
    UserInput { value: String },
    Blur,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    /// Apply this kind's validity predicate to a value.
    ///
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldKind::Email => email_predicate(value),
            FieldKind::Password => password_predicate(value),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Email => "E-Mail",
            FieldKind::Password => "Password",
        }
    }
}

/// An email is valid once it contains an `@`.
pub fn email_predicate(value: &str) -> bool {
    value.contains('@')
}

/// A password is valid when it has more than six characters after trimming.
///
pub fn password_predicate(value: &str) -> bool {
    value.trim().chars().count() > PASSWORD_MIN_EXCLUSIVE
}

/// Compute the next state of a field of the given kind.
///
/// Input is validated against the new value; blur re-validates the value
/// already held and never alters it.
///
pub fn reduce(kind: FieldKind, state: &FieldState, action: FieldAction) -> FieldState {
    match action {
        FieldAction::UserInput { value } => {
            let is_valid = Some(kind.validate(&value));
            FieldState { value, is_valid }
        }
        FieldAction::Blur => FieldState {
            value: state.value.clone(),
            is_valid: Some(kind.validate(&state.value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn input(value: &str) -> FieldAction {
        FieldAction::UserInput {
            value: value.to_string(),
        }
    }

    #[test]
    fn initial_state_is_unevaluated() {
        let state = FieldState::default();
        assert_eq!(state.value, "");
        assert_eq!(state.is_valid, None);
        assert!(!state.is_invalid());
    }

    #[test]
    fn email_predicate_requires_at_sign() {
        assert!(email_predicate("a@b.com"));
        assert!(email_predicate("@"));
        assert!(!email_predicate("abc"));
        assert!(!email_predicate(""));
    }

    #[test]
    fn password_predicate_requires_more_than_six_trimmed_chars() {
        assert!(password_predicate("secret1"));
        assert!(!password_predicate("secret"));
        assert!(!password_predicate("  secret  "));
        assert!(password_predicate("  secret1  "));
        assert!(!password_predicate(""));
    }

    #[test]
    fn user_input_takes_value_and_validates_it() {
        for _ in 0..50 {
            let value: String = Faker.fake();
            let next = reduce(FieldKind::Email, &FieldState::default(), input(&value));
            assert_eq!(next.value, value);
            assert_eq!(next.is_valid, Some(email_predicate(&value)));
        }
    }

    #[test]
    fn user_input_ignores_previous_validity() {
        let state = FieldState {
            value: "a@b.com".to_string(),
            is_valid: Some(true),
        };
        let next = reduce(FieldKind::Email, &state, input("ab.com"));
        assert_eq!(next.is_valid, Some(false));
    }

    #[test]
    fn blur_keeps_value() {
        for _ in 0..50 {
            let state = FieldState {
                value: Faker.fake(),
                is_valid: Faker.fake(),
            };
            let next = reduce(FieldKind::Password, &state, FieldAction::Blur);
            assert_eq!(next.value, state.value);
            assert_eq!(next.is_valid, Some(password_predicate(&state.value)));
        }
    }

    #[test]
    fn blur_revalidates_current_value() {
        let state = FieldState {
            value: "secret1".to_string(),
            is_valid: None,
        };
        let next = reduce(FieldKind::Password, &state, FieldAction::Blur);
        assert_eq!(next.is_valid, Some(true));

        let state = FieldState {
            value: "abc".to_string(),
            is_valid: Some(true),
        };
        let next = reduce(FieldKind::Email, &state, FieldAction::Blur);
        assert_eq!(next.is_valid, Some(false));
        assert!(next.is_invalid());
    }

    #[test]
    fn field_kind_labels() {
        assert_eq!(FieldKind::Email.label(), "E-Mail");
        assert_eq!(FieldKind::Password.label(), "Password");
    }
}
