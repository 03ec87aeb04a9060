use std::sync::Arc;

use image::GenericImageView;
use tracing::debug;

use crate::modules::media::application::domain::entities::RgbColor;
use crate::modules::media::application::ports::outgoing::ImageLoader;

/// Decodes an encoded image and reads its (0, 0) pixel.
pub fn top_left_color(bytes: &[u8]) -> Result<RgbColor, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(image::ImageError::Parameter(
            image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ),
        ));
    }
    Ok(RgbColor::from_rgba(decoded.get_pixel(0, 0).0))
}

#[derive(Clone)]
pub struct ColorSampler {
    loader: Arc<dyn ImageLoader>,
}

impl ColorSampler {
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        Self { loader }
    }

    /// Best effort: any load or decode failure yields `None`.
    pub async fn sample_top_left_color(&self, source: &str) -> Option<RgbColor> {
        let bytes = match self.loader.load(source).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(source, error = %e, "Image could not be loaded for sampling");
                return None;
            }
        };

        // decoding is CPU bound
        match tokio::task::spawn_blocking(move || top_left_color(&bytes)).await {
            Ok(Ok(color)) => Some(color),
            Ok(Err(e)) => {
                debug!(source, error = %e, "Image could not be decoded for sampling");
                None
            }
            Err(e) => {
                debug!(source, error = %e, "Sampling task failed");
                None
            }
        }
    }
}
