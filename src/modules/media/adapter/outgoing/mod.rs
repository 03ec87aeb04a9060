pub mod http_image_loader;

pub use http_image_loader::HttpImageLoader;
