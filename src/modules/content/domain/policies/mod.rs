pub mod display_order;
pub mod item_policy;

pub use display_order::{next_order, normalize_skills, parse_skills_input, sort_by_display_order};
pub use item_policy::{validate_new_item, validate_patch, ItemPolicyViolation};
