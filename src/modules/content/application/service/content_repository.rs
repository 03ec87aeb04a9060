use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, TimeDelta, Utc};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::modules::auth::application::ports::outgoing::admin_allowlist::AdminAllowlist;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentWriteError, ManageContentUseCase, ReadPortfolioUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    Document, DocumentData, DocumentQuery, DocumentStore, DocumentStoreError,
};
use crate::modules::content::domain::entities::{
    fields, ConfigDocument, NewPortfolioItem, ObjectiveDocument, PatchItemData, PortfolioItem,
    PortfolioSnapshot, Section, SingletonKey, SkillsDocument, CONFIG_KEY, DEFAULT_OBJECTIVE,
    OBJECTIVE_KEY, SKILLS_KEY,
};
use crate::modules::content::domain::policies::{
    item_policy::{check_order, MAX_OBJECTIVE},
    next_order, normalize_skills, sort_by_display_order, validate_new_item, validate_patch,
    ItemPolicyViolation,
};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────
//
// Reads degrade (logged, empty/default result); writes propagate.
//

#[derive(Clone)]
pub struct ContentRepository {
    store: Arc<dyn DocumentStore>,
}

impl ContentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn load_items(&self, section: Section, query: DocumentQuery) -> Vec<PortfolioItem> {
        match self.store.query(section.collection(), query).await {
            Ok(documents) => {
                let mut items = decode_items(section, documents);
                sort_by_display_order(&mut items);
                items
            }
            Err(e) => {
                error!(section = %section, error = %e, "Failed to load portfolio items");
                Vec::new()
            }
        }
    }

    async fn read_singleton<T: DeserializeOwned>(&self, key: SingletonKey) -> Option<T> {
        match self.store.get(key.collection, key.id).await {
            Ok(Some(document)) => match serde_json::from_value(Value::Object(document.data)) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(document = %key, error = %e, "Malformed singleton document");
                    None
                }
            },
            Ok(None) => {
                debug!(document = %key, "Singleton document does not exist");
                None
            }
            Err(e) => {
                error!(document = %key, error = %e, "Failed to read singleton document");
                None
            }
        }
    }

    async fn write_singleton(
        &self,
        key: SingletonKey,
        field: &str,
        value: Value,
    ) -> Result<(), ContentWriteError> {
        let mut data = DocumentData::new();
        data.insert(field.to_string(), value);
        data.insert(fields::UPDATED_AT.to_string(), timestamp(Utc::now()));

        match self.store.update(key.collection, key.id, data).await {
            Ok(()) => {
                info!(document = %key, "Updated singleton document");
                Ok(())
            }
            Err(DocumentStoreError::NotFound) => {
                warn!(document = %key, "Singleton document missing, nothing updated");
                Err(ContentWriteError::SingletonMissing(key.to_string()))
            }
            Err(e) => {
                error!(document = %key, error = %e, "Failed to update singleton document");
                Err(e.into())
            }
        }
    }

    /// Order for a create request that left it out.
    async fn next_order(&self, section: Section) -> Result<i64, ContentWriteError> {
        let documents = self
            .store
            .query(section.collection(), DocumentQuery::default())
            .await
            .map_err(|e| {
                error!(section = %section, error = %e, "Failed to compute next order");
                ContentWriteError::from(e)
            })?;

        Ok(next_order(&decode_items(section, documents)))
    }
}

//
// ──────────────────────────────────────────────────────────
// Reads
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl ReadPortfolioUseCase for ContentRepository {
    async fn public_portfolio(&self) -> PortfolioSnapshot {
        let (objective, education, experiences, projects, publications, skills) = tokio::join!(
            self.objective(),
            self.visible_items(Section::Education),
            self.visible_items(Section::Experiences),
            self.visible_items(Section::Projects),
            self.visible_items(Section::Publications),
            self.skills(),
        );

        PortfolioSnapshot {
            objective,
            education,
            experiences,
            projects,
            publications,
            skills,
        }
    }

    async fn visible_items(&self, section: Section) -> Vec<PortfolioItem> {
        // Filter only: combining it with a store-side sort would need a composite index.
        let query = DocumentQuery::default().where_eq(fields::VISIBLE, true);
        self.load_items(section, query).await
    }

    async fn objective(&self) -> String {
        self.read_singleton::<ObjectiveDocument>(OBJECTIVE_KEY)
            .await
            .map(|doc| doc.content)
            .unwrap_or_else(|| DEFAULT_OBJECTIVE.to_string())
    }

    async fn skills(&self) -> Vec<String> {
        self.read_singleton::<SkillsDocument>(SKILLS_KEY)
            .await
            .map(|doc| doc.skills)
            .unwrap_or_default()
    }
}

#[async_trait]
impl AdminAllowlist for ContentRepository {
    async fn allowed_email(&self) -> String {
        self.read_singleton::<ConfigDocument>(CONFIG_KEY)
            .await
            .map(|doc| doc.allowed_email)
            .unwrap_or_default()
    }
}

//
// ──────────────────────────────────────────────────────────
// Writes
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl ManageContentUseCase for ContentRepository {
    async fn admin_snapshot(&self) -> PortfolioSnapshot {
        let (mut sections, objective, skills) = tokio::join!(
            join_all(Section::ALL.map(|section| self.all_items(section))),
            self.objective(),
            self.skills(),
        );

        // join_all keeps the order of Section::ALL
        let publications = sections.pop().unwrap_or_default();
        let projects = sections.pop().unwrap_or_default();
        let experiences = sections.pop().unwrap_or_default();
        let education = sections.pop().unwrap_or_default();

        PortfolioSnapshot {
            objective,
            education,
            experiences,
            projects,
            publications,
            skills,
        }
    }

    async fn all_items(&self, section: Section) -> Vec<PortfolioItem> {
        let query = DocumentQuery::default().order_by_asc(fields::ORDER);
        self.load_items(section, query).await
    }

    async fn create_item(
        &self,
        section: Section,
        item: NewPortfolioItem,
    ) -> Result<String, ContentWriteError> {
        validate_new_item(&item)?;

        let order = match item.order {
            Some(order) => order,
            None => {
                let order = self.next_order(section).await?;
                check_order(order)?;
                order
            }
        };
        let data = new_item_document(&item, order, Utc::now())?;

        let id = self
            .store
            .add(section.collection(), data)
            .await
            .map_err(|e| {
                error!(section = %section, error = %e, "Failed to create portfolio item");
                ContentWriteError::from(e)
            })?;

        info!(section = %section, id = %id, order, "Created portfolio item");
        Ok(id)
    }

    async fn update_item(
        &self,
        section: Section,
        id: &str,
        patch: PatchItemData,
    ) -> Result<(), ContentWriteError> {
        validate_patch(&patch)?;

        let stored = match self.store.get(section.collection(), id).await {
            Ok(Some(document)) => document,
            Ok(None) => return Err(ContentWriteError::ItemNotFound),
            Err(e) => {
                error!(section = %section, id = %id, error = %e, "Failed to read portfolio item");
                return Err(e.into());
            }
        };
        let now = advance_past(stored_updated_at(&stored.data), Utc::now());
        let data = patch_document(&patch, now)?;

        match self.store.update(section.collection(), id, data).await {
            Ok(()) => {
                info!(section = %section, id = %id, "Updated portfolio item");
                Ok(())
            }
            Err(DocumentStoreError::NotFound) => Err(ContentWriteError::ItemNotFound),
            Err(e) => {
                error!(section = %section, id = %id, error = %e, "Failed to update portfolio item");
                Err(e.into())
            }
        }
    }

    async fn set_visibility(
        &self,
        section: Section,
        id: &str,
        visible: bool,
    ) -> Result<(), ContentWriteError> {
        self.update_item(section, id, PatchItemData::visibility(visible))
            .await
    }

    async fn delete_item(&self, section: Section, id: &str) -> Result<(), ContentWriteError> {
        self.store
            .delete(section.collection(), id)
            .await
            .map_err(|e| {
                error!(section = %section, id = %id, error = %e, "Failed to delete portfolio item");
                ContentWriteError::from(e)
            })?;

        info!(section = %section, id = %id, "Deleted portfolio item");
        Ok(())
    }

    async fn update_objective(&self, content: String) -> Result<(), ContentWriteError> {
        if content.chars().count() > MAX_OBJECTIVE {
            return Err(ItemPolicyViolation::TooLong {
                field: "content",
                max: MAX_OBJECTIVE,
            }
            .into());
        }

        self.write_singleton(OBJECTIVE_KEY, fields::CONTENT, Value::String(content))
            .await
    }

    async fn update_skills(&self, skills: Vec<String>) -> Result<(), ContentWriteError> {
        let skills = normalize_skills(skills);
        let value = to_json(&skills)?;

        self.write_singleton(SKILLS_KEY, fields::SKILLS, value).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────
//

/// Documents that no longer match the item shape are skipped, not fatal.
fn decode_items(section: Section, documents: Vec<Document>) -> Vec<PortfolioItem> {
    documents
        .into_iter()
        .filter_map(|Document { id, mut data }| {
            data.insert("id".to_string(), Value::String(id.clone()));
            match serde_json::from_value(Value::Object(data)) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(section = %section, id = %id, error = %e, "Skipping malformed portfolio item");
                    None
                }
            }
        })
        .collect()
}

pub(crate) fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn stored_updated_at(data: &DocumentData) -> Option<DateTime<Utc>> {
    let raw = data.get(fields::UPDATED_AT)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// Stored timestamps keep milliseconds, so a write inside the same
/// millisecond as the previous one moves forward by one.
fn advance_past(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = now.trunc_subsecs(3);
    match previous {
        Some(previous) if now <= previous => previous + TimeDelta::milliseconds(1),
        _ => now,
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ContentWriteError> {
    serde_json::to_value(value).map_err(|e| ContentWriteError::Store(e.to_string()))
}

fn new_item_document(
    item: &NewPortfolioItem,
    order: i64,
    now: DateTime<Utc>,
) -> Result<DocumentData, ContentWriteError> {
    let mut data = match to_json(item)? {
        Value::Object(map) => map,
        _ => {
            return Err(ContentWriteError::Store(
                "portfolio item did not serialize to an object".to_string(),
            ))
        }
    };

    data.insert(fields::ORDER.to_string(), Value::from(order));
    data.insert(fields::CREATED_AT.to_string(), timestamp(now));
    data.insert(fields::UPDATED_AT.to_string(), timestamp(now));
    Ok(data)
}

fn put<T: Serialize>(
    data: &mut DocumentData,
    key: &str,
    field: &PatchField<T>,
) -> Result<(), ContentWriteError> {
    match field {
        PatchField::Unset => {}
        PatchField::Null => {
            data.insert(key.to_string(), Value::Null);
        }
        PatchField::Value(value) => {
            data.insert(key.to_string(), to_json(value)?);
        }
    }
    Ok(())
}

fn patch_document(
    patch: &PatchItemData,
    now: DateTime<Utc>,
) -> Result<DocumentData, ContentWriteError> {
    let mut data = DocumentData::new();

    put(&mut data, "title", &patch.title)?;
    put(&mut data, "description", &patch.description)?;
    put(&mut data, "institution", &patch.institution)?;
    put(&mut data, "company", &patch.company)?;
    put(&mut data, "role", &patch.role)?;
    put(&mut data, "startDate", &patch.start_date)?;
    put(&mut data, "endDate", &patch.end_date)?;
    put(&mut data, "location", &patch.location)?;
    put(&mut data, "technologies", &patch.technologies)?;
    put(&mut data, "skills", &patch.skills)?;
    put(&mut data, "link", &patch.link)?;
    put(&mut data, "imageUrl", &patch.image_url)?;
    put(&mut data, fields::VISIBLE, &patch.visible)?;
    put(&mut data, fields::ORDER, &patch.order)?;

    data.insert(fields::UPDATED_AT.to_string(), timestamp(now));
    Ok(data)
}
