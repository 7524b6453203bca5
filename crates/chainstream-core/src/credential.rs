//! Bearer-token credential resolution.

use std::env;
use std::fmt;

use crate::error::SessionError;

/// An opaque bearer token for the streaming endpoint.
///
/// The only invariant is non-emptiness: a session without a credential is a
/// configuration error at startup, never a silent default. The token itself
/// is treated as opaque and kept out of `Debug` output so it cannot leak
/// into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Reads the token from the named environment variable.
    ///
    /// Unset and empty (or whitespace-only) are the same failure. The read
    /// has no side effects and is idempotent: two calls against the same
    /// process environment return the same result.
    pub fn resolve(var: &str) -> Result<Self, SessionError> {
        match env::var(var) {
            Ok(token) if !token.trim().is_empty() => Ok(Self { token }),
            _ => Err(SessionError::MissingToken { var: var.to_string() }),
        }
    }

    /// Wraps a token obtained elsewhere (a vault, a test). Same non-empty
    /// invariant as [`Credential::resolve`].
    pub fn new(token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyCredential);
        }
        Ok(Self { token })
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The `authorization` header value carrying this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").field("token", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn unset_variable_is_a_configuration_error() {
        let err = Credential::resolve("CHAINSTREAM_TEST_TOKEN_UNSET").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("CHAINSTREAM_TEST_TOKEN_UNSET"));
    }

    #[test]
    fn empty_variable_is_a_configuration_error() {
        env::set_var("CHAINSTREAM_TEST_TOKEN_EMPTY", "");
        let err = Credential::resolve("CHAINSTREAM_TEST_TOKEN_EMPTY").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        env::set_var("CHAINSTREAM_TEST_TOKEN_BLANK", "   ");
        let err = Credential::resolve("CHAINSTREAM_TEST_TOKEN_BLANK").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn resolution_is_idempotent() {
        env::set_var("CHAINSTREAM_TEST_TOKEN_SET", "tok-123");
        let first = Credential::resolve("CHAINSTREAM_TEST_TOKEN_SET").unwrap();
        let second = Credential::resolve("CHAINSTREAM_TEST_TOKEN_SET").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.token(), "tok-123");
    }

    #[test]
    fn bearer_prefixes_the_token() {
        let cred = Credential::new("abc").unwrap();
        assert_eq!(cred.bearer(), "Bearer abc");
    }

    #[test]
    fn direct_empty_token_is_rejected() {
        let err = Credential::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn debug_never_shows_the_token() {
        let cred = Credential::new("super-secret").unwrap();
        let rendered = format!("{cred:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));
    }
}
