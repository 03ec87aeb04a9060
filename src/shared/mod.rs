pub mod api;
pub mod patch;
