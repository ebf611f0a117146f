//! Provider credential value objects

use std::fmt;

use crate::domain::error::OrchestrationError;

/// API client credentials, supplied at process start and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials from id/secret pair
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Reject empty credentials before any network call is made.
    pub fn validate(&self) -> Result<(), OrchestrationError> {
        if self.client_id.trim().is_empty() {
            return Err(OrchestrationError::AuthFailed(
                "client_id must not be empty".to_string(),
            ));
        }
        if self.client_secret.trim().is_empty() {
            return Err(OrchestrationError::AuthFailed(
                "client_secret must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Credentials {
    /// Secret is never printed; only the masked client id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", mask(&self.client_id))
    }
}

/// Short-lived bearer token returned by the provider.
///
/// Owned by a single orchestration call; never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Mask a secret for display (show first 4 and last 4 chars)
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_pass() {
        let creds = Credentials::new("id", "secret");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn empty_client_id_fails_fast() {
        let creds = Credentials::new("", "secret");
        let err = creds.validate().unwrap_err();
        assert!(matches!(err, OrchestrationError::AuthFailed(_)));
    }

    #[test]
    fn whitespace_secret_fails_fast() {
        let creds = Credentials::new("id", "   ");
        let err = creds.validate().unwrap_err();
        assert!(matches!(err, OrchestrationError::AuthFailed(_)));
    }

    #[test]
    fn display_masks_client_id() {
        let creds = Credentials::new("abcdefghijklmnop", "secret");
        assert_eq!(creds.to_string(), "abcd...mnop");
    }

    #[test]
    fn mask_short_value() {
        assert_eq!(mask("short"), "*****");
    }

    #[test]
    fn token_round_trip() {
        let token = AccessToken::new("jwt-token");
        assert_eq!(token.as_str(), "jwt-token");
    }
}
