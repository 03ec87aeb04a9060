use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
pub const GOOGLE_REVOKE_URL: &str = "https://oauth2.googleapis.com/revoke";

/// Resolves Google OAuth access tokens through the OpenID userinfo endpoint
/// and revokes them on sign-out.
#[derive(Clone)]
pub struct GoogleIdentityProvider {
    client: reqwest::Client,
    userinfo_url: String,
    revoke_url: String,
}

impl GoogleIdentityProvider {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_endpoints(timeout, GOOGLE_USERINFO_URL, GOOGLE_REVOKE_URL)
    }

    pub fn with_endpoints(
        timeout: Duration,
        userinfo_url: &str,
        revoke_url: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            userinfo_url: userinfo_url.to_string(),
            revoke_url: revoke_url.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<bool>,
}

impl From<UserInfo> for Principal {
    fn from(info: UserInfo) -> Self {
        // an address Google has not verified cannot be matched against the allowlist
        let email = match info.email_verified {
            Some(false) => None,
            _ => info.email,
        };

        Principal {
            subject: info.sub,
            email,
        }
    }
}

fn classify_failure(status: StatusCode) -> IdentityProviderError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            IdentityProviderError::InvalidCredential
        }
        other => IdentityProviderError::Unavailable(format!("unexpected status {other}")),
    }
}

fn unavailable(e: reqwest::Error) -> IdentityProviderError {
    IdentityProviderError::Unavailable(e.to_string())
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    async fn authenticate(&self, credential: &str) -> Result<Principal, IdentityProviderError> {
        if credential.is_empty() {
            return Err(IdentityProviderError::InvalidCredential);
        }

        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(credential)
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "Userinfo request rejected");
            return Err(classify_failure(status));
        }

        let info: UserInfo = response.json().await.map_err(unavailable)?;
        Ok(info.into())
    }

    async fn sign_out(&self, credential: &str) -> Result<(), IdentityProviderError> {
        let url = Url::parse_with_params(&self.revoke_url, &[("token", credential)])
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            debug!(%status, "Token revocation rejected");
            Err(classify_failure(status))
        }
    }
}
