use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Well-known documents
// ──────────────────────────────────────────────────────────
//

/// Address of a singleton document. Singletons are never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingletonKey {
    pub collection: &'static str,
    pub id: &'static str,
}

impl fmt::Display for SingletonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

pub const OBJECTIVE_KEY: SingletonKey = SingletonKey {
    collection: "objective",
    id: "main",
};

pub const SKILLS_KEY: SingletonKey = SingletonKey {
    collection: "skills",
    id: "main",
};

pub const CONFIG_KEY: SingletonKey = SingletonKey {
    collection: "config",
    id: "auth",
};

/// Shown on the public page when the objective document cannot be read.
pub const DEFAULT_OBJECTIVE: &str = "Passionate developer creating innovative solutions...";

/// Document field names shared by the repository and the store adapters.
pub mod fields {
    pub const VISIBLE: &str = "visible";
    pub const ORDER: &str = "order";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const CONTENT: &str = "content";
    pub const SKILLS: &str = "skills";
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Education,
    Experiences,
    Projects,
    Publications,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Experiences,
        Section::Projects,
        Section::Publications,
    ];

    /// The section name doubles as the collection name.
    pub fn collection(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experiences => "experiences",
            Section::Projects => "projects",
            Section::Publications => "publications",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.collection() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Portfolio items
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    /// Store-assigned, unique within its section.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Absent means ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visible: bool,
    /// Absent in older documents; those sort as 0.
    #[serde(default)]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_visible() -> bool {
    true
}

/// Fields supplied by an administrator when adding an item.
/// A missing `order` places the item after every existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Default for NewPortfolioItem {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            institution: None,
            company: None,
            role: None,
            start_date: None,
            end_date: None,
            location: None,
            technologies: None,
            skills: None,
            link: None,
            image_url: None,
            visible: true,
            order: None,
        }
    }
}

/// Patch semantics:
/// - optional text/list fields: Unset => keep, Null => clear, Value => replace
/// - list fields are replaced whole, never merged
/// - visible/order: Unset => keep, Value => replace (Null is rejected by policy)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchItemData {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub institution: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub role: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<String>,
    #[serde(default)]
    pub end_date: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default)]
    pub skills: PatchField<Vec<String>>,
    #[serde(default)]
    pub link: PatchField<String>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub visible: PatchField<bool>,
    #[serde(default)]
    pub order: PatchField<i64>,
}

impl PatchItemData {
    pub fn visibility(visible: bool) -> Self {
        Self {
            visible: PatchField::Value(visible),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.institution.is_unset()
            && self.company.is_unset()
            && self.role.is_unset()
            && self.start_date.is_unset()
            && self.end_date.is_unset()
            && self.location.is_unset()
            && self.technologies.is_unset()
            && self.skills.is_unset()
            && self.link.is_unset()
            && self.image_url.is_unset()
            && self.visible.is_unset()
            && self.order.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Singleton documents
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveDocument {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDocument {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default)]
    pub allowed_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Aggregates
// ──────────────────────────────────────────────────────────
//

/// Everything the portfolio page renders. The public variant only carries
/// visible items; the admin variant carries every item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub objective: String,
    pub education: Vec<PortfolioItem>,
    pub experiences: Vec<PortfolioItem>,
    pub projects: Vec<PortfolioItem>,
    pub publications: Vec<PortfolioItem>,
    pub skills: Vec<String>,
}
