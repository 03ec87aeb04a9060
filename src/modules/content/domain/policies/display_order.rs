use std::collections::HashSet;

use crate::modules::content::domain::entities::PortfolioItem;

/// Ascending by `order`. The sort is stable, so equal orders keep the
/// sequence the store returned them in.
pub fn sort_by_display_order(items: &mut [PortfolioItem]) {
    items.sort_by_key(|item| item.order);
}

/// Order for an item appended after everything already in the section.
pub fn next_order(items: &[PortfolioItem]) -> i64 {
    items
        .iter()
        .map(|item| item.order)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Comma-separated skills as typed into the dashboard.
pub fn parse_skills_input(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

/// Trims entries, drops blanks and repeats. The first occurrence keeps its place.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty() && seen.insert(skill.clone()))
        .collect()
}
