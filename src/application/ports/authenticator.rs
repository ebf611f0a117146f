//! Authentication port interface

use async_trait::async_trait;

use crate::domain::credentials::{AccessToken, Credentials};
use crate::domain::error::OrchestrationError;

/// Port for exchanging client credentials for a short-lived bearer token.
///
/// One network exchange, no retry: auth failures are not assumed
/// transient, the caller decides whether to retry the whole
/// orchestration. The token is returned by value and never cached.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a bearer token.
    ///
    /// Empty credentials fail fast with `AuthFailed` without a network
    /// call. A non-2xx response or a payload missing the token field
    /// yields `AuthFailed` carrying the provider's raw error body.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, OrchestrationError>;
}
