use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::modules::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

// ========================= Sign-out Request =========================
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AdminSignOutRequest {
    pub credential: String,
}

// ====================== Sign-out Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminSignOutError {
    #[error("Identity provider error: {0}")]
    Provider(String),
}

// ============================ Sign-out Use Case =============================
#[async_trait]
pub trait IAdminSignOutUseCase: Send + Sync {
    async fn execute(&self, request: AdminSignOutRequest) -> Result<(), AdminSignOutError>;
}

#[derive(Clone)]
pub struct AdminSignOutUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl AdminSignOutUseCase {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl IAdminSignOutUseCase for AdminSignOutUseCase {
    async fn execute(&self, request: AdminSignOutRequest) -> Result<(), AdminSignOutError> {
        match self
            .identity_provider
            .sign_out(request.credential.trim())
            .await
        {
            // Already expired or revoked: the session is gone either way.
            Ok(()) | Err(IdentityProviderError::InvalidCredential) => {
                info!("Administrator signed out");
                Ok(())
            }
            Err(IdentityProviderError::Unavailable(msg)) => Err(AdminSignOutError::Provider(msg)),
        }
    }
}
