use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::auth::application::ports::outgoing::{
    AdminAllowlist, IdentityProvider, IdentityProviderError, TokenProvider,
};

// ========================= Sign-in Request =========================
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AdminSignInRequest {
    /// Credential obtained from the identity provider's sign-in flow.
    pub credential: String,
}

// ====================== Sign-in Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminSignInError {
    #[error("Credential rejected by identity provider")]
    InvalidCredential,

    #[error("Email not authorized")]
    NotAuthorized,

    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error("Failed to issue session token: {0}")]
    TokenIssue(String),
}

impl From<IdentityProviderError> for AdminSignInError {
    fn from(err: IdentityProviderError) -> Self {
        match err {
            IdentityProviderError::InvalidCredential => AdminSignInError::InvalidCredential,
            IdentityProviderError::Unavailable(msg) => AdminSignInError::Provider(msg),
        }
    }
}

// ============================ Sign-in Use Case =============================
#[async_trait]
pub trait IAdminSignInUseCase: Send + Sync {
    async fn execute(&self, request: AdminSignInRequest) -> Result<AdminSession, AdminSignInError>;
}

#[derive(Clone)]
pub struct AdminSignInUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
    allowlist: Arc<dyn AdminAllowlist>,
    token_provider: Arc<dyn TokenProvider>,
}

impl AdminSignInUseCase {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        allowlist: Arc<dyn AdminAllowlist>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            identity_provider,
            allowlist,
            token_provider,
        }
    }
}

#[async_trait]
impl IAdminSignInUseCase for AdminSignInUseCase {
    async fn execute(&self, request: AdminSignInRequest) -> Result<AdminSession, AdminSignInError> {
        let credential = request.credential.trim();

        let principal = self.identity_provider.authenticate(credential).await?;
        let allowed_email = self.allowlist.allowed_email().await;

        let email = match principal.email.clone() {
            Some(email) if principal.is_allowed(&allowed_email) => email,
            _ => {
                warn!(
                    subject = %principal.subject,
                    "Sign-in rejected: email is not the allowlisted address"
                );
                // The provider session must not outlive the rejection.
                if let Err(e) = self.identity_provider.sign_out(credential).await {
                    error!(error = %e, "Failed to sign out rejected principal");
                }
                return Err(AdminSignInError::NotAuthorized);
            }
        };

        let issued = self
            .token_provider
            .issue_admin_token(&email)
            .map_err(|e| AdminSignInError::TokenIssue(e.to_string()))?;

        info!(email = %email, "Administrator signed in");

        Ok(AdminSession {
            token: issued.token,
            email,
            expires_at: issued.expires_at,
        })
    }
}
