mod get_placeholder;

pub use get_placeholder::*;
