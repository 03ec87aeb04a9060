mod color_sampler;
mod image_placeholder_service;

pub use color_sampler::{top_left_color, ColorSampler};
pub use image_placeholder_service::ImagePlaceholderService;
