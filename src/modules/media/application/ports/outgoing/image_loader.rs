use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageLoaderError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Image source rejected: {0}")]
    Rejected(String),

    #[error("Image exceeds {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },

    #[error("Failed to load image: {0}")]
    Io(String),
}

/// Fetches the raw bytes behind a normalized image source.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<Vec<u8>, ImageLoaderError>;
}
