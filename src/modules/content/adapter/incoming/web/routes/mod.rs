mod admin_get_portfolio;
mod admin_get_section_items;
mod create_item;
mod delete_item;
mod get_objective;
mod get_portfolio;
mod get_section_items;
mod get_skills;
pub mod section_path;
mod set_visibility;
mod update_item;
mod update_objective;
mod update_skills;

pub use admin_get_portfolio::*;
pub use admin_get_section_items::*;
pub use create_item::*;
pub use delete_item::*;
pub use get_objective::*;
pub use get_portfolio::*;
pub use get_section_items::*;
pub use get_skills::*;
pub use set_visibility::*;
pub use update_item::*;
pub use update_objective::*;
pub use update_skills::*;
