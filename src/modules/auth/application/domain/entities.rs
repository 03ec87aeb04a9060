use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Identity resolved by the external provider from a sign-in credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    /// Only set when the provider vouches for the address.
    pub email: Option<String>,
}

impl Principal {
    /// Case-insensitive comparison against the allowlisted address.
    /// An empty allowlist or a principal without email never matches.
    pub fn is_allowed(&self, allowed_email: &str) -> bool {
        if allowed_email.is_empty() {
            return false;
        }
        let allowed = allowed_email.to_lowercase();
        self.email
            .as_deref()
            .is_some_and(|email| email.to_lowercase() == allowed)
    }
}

/// Issued to an administrator after a successful sign-in.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}
