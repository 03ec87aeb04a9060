pub mod content_repository;
pub mod maintenance;

pub use content_repository::ContentRepository;
pub use maintenance::{MaintenanceError, PortfolioMaintenance};
