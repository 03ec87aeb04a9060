use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("{0} must be set when DOCUMENT_STORE=postgres")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "postgres" => Ok(StoreBackend::Postgres),
            other => Err(format!("expected memory or postgres, got {other:?}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub document_store: StoreBackend,
    pub database_url: Option<String>,
    pub public_dir: PathBuf,
    pub image_fetch_timeout: Duration,
    pub image_max_bytes: u64,
    pub identity_provider_timeout: Duration,
    /// Only read by `seed`.
    pub allowed_email: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let document_store: StoreBackend =
            try_load(&lookup, "DOCUMENT_STORE", "postgres")?;
        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        if document_store == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "8080")?,
            document_store,
            database_url,
            public_dir: try_load(&lookup, "PUBLIC_DIR", "public")?,
            image_fetch_timeout: Duration::from_secs(try_load(
                &lookup,
                "IMAGE_FETCH_TIMEOUT_SECS",
                "5",
            )?),
            image_max_bytes: try_load(&lookup, "IMAGE_MAX_BYTES", "10485760")?,
            identity_provider_timeout: Duration::from_secs(try_load(
                &lookup,
                "IDENTITY_PROVIDER_TIMEOUT_SECS",
                "10",
            )?),
            allowed_email: lookup("ALLOWED_EMAIL").filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        })
}
