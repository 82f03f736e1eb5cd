//! Session-specific error types.

/// Errors that can occur when changing the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Activation was requested without an email or password
    #[error("Cannot activate a session with empty credentials")]
    EmptyCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let error = SessionError::EmptyCredentials;
        assert!(error.to_string().contains("empty credentials"));
    }
}
