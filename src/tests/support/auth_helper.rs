use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        session_expiry: 3600,
    })
}

/// Shaped the way `AdminUser` looks it up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value for an administrator session.
pub fn admin_bearer(email: &str) -> String {
    let issued = test_jwt_service().issue_admin_token(email).unwrap();
    format!("Bearer {}", issued.token)
}
