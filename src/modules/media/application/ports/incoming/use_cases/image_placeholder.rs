use async_trait::async_trait;

use crate::modules::media::application::domain::entities::ImagePlaceholder;

/// Never fails: a color that cannot be sampled is simply absent.
#[async_trait]
pub trait ImagePlaceholderUseCase: Send + Sync {
    async fn execute(&self, src: Option<&str>) -> ImagePlaceholder;
}
