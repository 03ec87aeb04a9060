mod image_placeholder;

pub use image_placeholder::ImagePlaceholderUseCase;
