use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{
    ImagePlaceholder, FALLBACK_BACKGROUND,
};
use crate::modules::media::application::domain::image_path::normalize_path;
use crate::modules::media::application::ports::incoming::use_cases::ImagePlaceholderUseCase;
use crate::modules::media::application::service::ColorSampler;

#[derive(Clone)]
pub struct ImagePlaceholderService {
    sampler: ColorSampler,
}

impl ImagePlaceholderService {
    pub fn new(sampler: ColorSampler) -> Self {
        Self { sampler }
    }
}

#[async_trait]
impl ImagePlaceholderUseCase for ImagePlaceholderService {
    async fn execute(&self, src: Option<&str>) -> ImagePlaceholder {
        let src = normalize_path(src);

        let background = if src.is_empty() {
            None
        } else {
            self.sampler
                .sample_top_left_color(&src)
                .await
                .map(|color| color.to_string())
        };

        ImagePlaceholder {
            src,
            background,
            fallback_background: FALLBACK_BACKGROUND.to_string(),
        }
    }
}
