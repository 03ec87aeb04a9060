use regex::Regex;
use std::sync::LazyLock;

use crate::modules::content::domain::entities::{NewPortfolioItem, PatchItemData};
use crate::shared::patch::PatchField;

pub const MAX_SHORT_TEXT: usize = 200;
pub const MAX_DESCRIPTION: usize = 5000;
pub const MAX_LIST_ENTRIES: usize = 50;
pub const MAX_OBJECTIVE: usize = 5000;
pub const MAX_ORDER: i64 = i32::MAX as i64;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])(-(0[1-9]|[12]\d|3[01]))?$").expect("valid date regex")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemPolicyViolation {
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{0} must be an http or https URL")]
    InvalidUrl(&'static str),

    #[error("{0} must be formatted as YYYY-MM or YYYY-MM-DD")]
    InvalidDate(&'static str),

    #[error("order must not be negative")]
    NegativeOrder,

    #[error("order must be at most {0}")]
    OrderTooLarge(i64),

    #[error("{field} accepts at most {max} entries")]
    TooManyEntries { field: &'static str, max: usize },

    #[error("{0} entries must not be blank")]
    BlankEntry(&'static str),

    #[error("{0} cannot be cleared")]
    NotNullable(&'static str),

    #[error("Patch contains no fields")]
    EmptyPatch,
}

fn check_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ItemPolicyViolation> {
    if value.chars().count() > max {
        return Err(ItemPolicyViolation::TooLong { field, max });
    }
    Ok(())
}

pub fn check_order(order: i64) -> Result<(), ItemPolicyViolation> {
    if order < 0 {
        Err(ItemPolicyViolation::NegativeOrder)
    } else if order > MAX_ORDER {
        Err(ItemPolicyViolation::OrderTooLarge(MAX_ORDER))
    } else {
        Ok(())
    }
}

fn check_date(field: &'static str, value: &str) -> Result<(), ItemPolicyViolation> {
    if value.is_empty() || DATE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ItemPolicyViolation::InvalidDate(field))
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ItemPolicyViolation> {
    if value.is_empty() {
        return Ok(());
    }
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.chars().any(char::is_whitespace) => {
            check_length(field, value, 2048)
        }
        _ => Err(ItemPolicyViolation::InvalidUrl(field)),
    }
}

fn check_list(field: &'static str, values: &[String]) -> Result<(), ItemPolicyViolation> {
    if values.len() > MAX_LIST_ENTRIES {
        return Err(ItemPolicyViolation::TooManyEntries {
            field,
            max: MAX_LIST_ENTRIES,
        });
    }
    for value in values {
        if value.trim().is_empty() {
            return Err(ItemPolicyViolation::BlankEntry(field));
        }
        check_length(field, value, MAX_SHORT_TEXT)?;
    }
    Ok(())
}

/// Field checks shared by creation and patching. `None` means the field is
/// not being written.
struct ItemFields<'a> {
    title: Option<&'a String>,
    description: Option<&'a String>,
    institution: Option<&'a String>,
    company: Option<&'a String>,
    role: Option<&'a String>,
    location: Option<&'a String>,
    start_date: Option<&'a String>,
    end_date: Option<&'a String>,
    link: Option<&'a String>,
    image_url: Option<&'a String>,
    technologies: Option<&'a Vec<String>>,
    skills: Option<&'a Vec<String>>,
    order: Option<i64>,
}

fn check_fields(fields: ItemFields<'_>) -> Result<(), ItemPolicyViolation> {
    let short_texts = [
        ("title", fields.title),
        ("institution", fields.institution),
        ("company", fields.company),
        ("role", fields.role),
        ("location", fields.location),
    ];
    for (name, value) in short_texts {
        if let Some(value) = value {
            check_length(name, value, MAX_SHORT_TEXT)?;
        }
    }
    if let Some(description) = fields.description {
        check_length("description", description, MAX_DESCRIPTION)?;
    }
    if let Some(start) = fields.start_date {
        check_date("startDate", start)?;
    }
    if let Some(end) = fields.end_date {
        check_date("endDate", end)?;
    }
    if let Some(link) = fields.link {
        check_url("link", link)?;
    }
    if let Some(image_url) = fields.image_url {
        check_length("imageUrl", image_url, 2048)?;
    }
    if let Some(technologies) = fields.technologies {
        check_list("technologies", technologies)?;
    }
    if let Some(skills) = fields.skills {
        check_list("skills", skills)?;
    }
    if let Some(order) = fields.order {
        check_order(order)?;
    }
    Ok(())
}

pub fn validate_new_item(item: &NewPortfolioItem) -> Result<(), ItemPolicyViolation> {
    check_fields(ItemFields {
        title: item.title.as_ref(),
        description: item.description.as_ref(),
        institution: item.institution.as_ref(),
        company: item.company.as_ref(),
        role: item.role.as_ref(),
        location: item.location.as_ref(),
        start_date: item.start_date.as_ref(),
        end_date: item.end_date.as_ref(),
        link: item.link.as_ref(),
        image_url: item.image_url.as_ref(),
        technologies: item.technologies.as_ref(),
        skills: item.skills.as_ref(),
        order: item.order,
    })
}

pub fn validate_patch(patch: &PatchItemData) -> Result<(), ItemPolicyViolation> {
    if patch.is_empty() {
        return Err(ItemPolicyViolation::EmptyPatch);
    }
    if patch.visible.is_null() {
        return Err(ItemPolicyViolation::NotNullable("visible"));
    }
    if patch.order.is_null() {
        return Err(ItemPolicyViolation::NotNullable("order"));
    }

    let order = match &patch.order {
        PatchField::Value(order) => Some(*order),
        _ => None,
    };

    check_fields(ItemFields {
        title: patch.title.as_value(),
        description: patch.description.as_value(),
        institution: patch.institution.as_value(),
        company: patch.company.as_value(),
        role: patch.role.as_value(),
        location: patch.location.as_value(),
        start_date: patch.start_date.as_value(),
        end_date: patch.end_date.as_value(),
        link: patch.link.as_value(),
        image_url: patch.image_url.as_value(),
        technologies: patch.technologies.as_value(),
        skills: patch.skills.as_value(),
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_experience() {
        let item = NewPortfolioItem {
            company: Some("Acme".to_string()),
            role: Some("Engineer".to_string()),
            start_date: Some("2021-04".to_string()),
            end_date: Some(String::new()),
            link: Some("https://acme.example".to_string()),
            technologies: Some(vec!["Rust".to_string(), "Postgres".to_string()]),
            order: Some(0),
            ..Default::default()
        };
        assert_eq!(validate_new_item(&item), Ok(()));
    }

    #[test]
    fn rejects_overlong_title() {
        let item = NewPortfolioItem {
            title: Some("x".repeat(MAX_SHORT_TEXT + 1)),
            ..Default::default()
        };
        assert_eq!(
            validate_new_item(&item),
            Err(ItemPolicyViolation::TooLong {
                field: "title",
                max: MAX_SHORT_TEXT
            })
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["2021", "2021-13", "21-01", "2021-02-32", "soon"] {
            let item = NewPortfolioItem {
                start_date: Some(bad.to_string()),
                ..Default::default()
            };
            assert_eq!(
                validate_new_item(&item),
                Err(ItemPolicyViolation::InvalidDate("startDate")),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_http_links() {
        for bad in ["ftp://files", "javascript:alert(1)", "https://", "http://a b"] {
            let item = NewPortfolioItem {
                link: Some(bad.to_string()),
                ..Default::default()
            };
            assert_eq!(
                validate_new_item(&item),
                Err(ItemPolicyViolation::InvalidUrl("link"))
            );
        }
    }

    #[test]
    fn rejects_negative_order_and_blank_entries() {
        let negative = NewPortfolioItem {
            order: Some(-1),
            ..Default::default()
        };
        assert_eq!(
            validate_new_item(&negative),
            Err(ItemPolicyViolation::NegativeOrder)
        );

        let blank = NewPortfolioItem {
            skills: Some(vec!["Rust".to_string(), "  ".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            validate_new_item(&blank),
            Err(ItemPolicyViolation::BlankEntry("skills"))
        );
    }

    #[test]
    fn rejects_order_beyond_maximum() {
        let huge = NewPortfolioItem {
            order: Some(i64::MAX),
            ..Default::default()
        };
        assert_eq!(
            validate_new_item(&huge),
            Err(ItemPolicyViolation::OrderTooLarge(MAX_ORDER))
        );

        let at_limit = NewPortfolioItem {
            order: Some(MAX_ORDER),
            ..Default::default()
        };
        assert_eq!(validate_new_item(&at_limit), Ok(()));
    }

    #[test]
    fn rejects_empty_patch() {
        assert_eq!(
            validate_patch(&PatchItemData::default()),
            Err(ItemPolicyViolation::EmptyPatch)
        );
    }

    #[test]
    fn patch_cannot_clear_visible_or_order() {
        let patch = PatchItemData {
            visible: PatchField::Null,
            ..Default::default()
        };
        assert_eq!(
            validate_patch(&patch),
            Err(ItemPolicyViolation::NotNullable("visible"))
        );

        let patch = PatchItemData {
            order: PatchField::Null,
            ..Default::default()
        };
        assert_eq!(
            validate_patch(&patch),
            Err(ItemPolicyViolation::NotNullable("order"))
        );
    }

    #[test]
    fn patch_may_clear_optional_text() {
        let patch = PatchItemData {
            end_date: PatchField::Null,
            link: PatchField::Null,
            ..Default::default()
        };
        assert_eq!(validate_patch(&patch), Ok(()));
    }
}
