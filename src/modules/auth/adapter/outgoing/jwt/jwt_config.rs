use std::env;

#[derive(Debug, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidExpiry(&'static str),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub session_expiry: i64, // seconds
}

impl JwtConfig {
    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, JwtConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidExpiry(key)),
            Err(_) => Ok(default),
        }
    }

    /// Reads `JWT_SECRET` and `JWT_SESSION_EXPIRY` (default 8 hours).
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;

        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        let session_expiry = Self::parse_expiry("JWT_SESSION_EXPIRY", 8 * 3600)?;
        if session_expiry <= 0 || session_expiry > 7 * 86400 {
            return Err(JwtConfigError::InvalidExpiry("JWT_SESSION_EXPIRY"));
        }

        Ok(Self {
            secret_key,
            session_expiry,
        })
    }
}
