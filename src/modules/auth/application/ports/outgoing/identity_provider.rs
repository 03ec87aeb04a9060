use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityProviderError {
    /// Credential expired, revoked or never valid.
    #[error("Credential rejected by identity provider")]
    InvalidCredential,

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// External sign-in service holding the administrator's account.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, credential: &str) -> Result<Principal, IdentityProviderError>;

    /// Ends the provider-side session behind the credential.
    async fn sign_out(&self, credential: &str) -> Result<(), IdentityProviderError>;
}
