pub mod entities;
pub mod image_path;
