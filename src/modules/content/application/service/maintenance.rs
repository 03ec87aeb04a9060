use chrono::Utc;
use email_address::EmailAddress;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::modules::content::application::ports::outgoing::{
    DocumentData, DocumentQuery, DocumentStore, DocumentStoreError,
};
use crate::modules::content::application::service::content_repository::timestamp;
use crate::modules::content::domain::entities::{
    Section, SingletonKey, CONFIG_KEY, OBJECTIVE_KEY, SKILLS_KEY,
};

#[derive(Debug, thiserror::Error)]
pub enum MaintenanceError {
    #[error("Invalid allowed email: {0:?}")]
    InvalidAllowedEmail(String),

    #[error("Store error: {0}")]
    Store(#[from] DocumentStoreError),
}

/// Bulk operations run from the command line, outside the HTTP surface.
pub struct PortfolioMaintenance {
    store: Arc<dyn DocumentStore>,
}

impl PortfolioMaintenance {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Writes the three singletons and one starter item per section.
    pub async fn seed(&self, allowed_email: &str) -> Result<(), MaintenanceError> {
        if !EmailAddress::is_valid(allowed_email) {
            return Err(MaintenanceError::InvalidAllowedEmail(
                allowed_email.to_string(),
            ));
        }

        let now = timestamp(Utc::now());

        self.put_singleton(
            OBJECTIVE_KEY,
            json!({
                "content": "Software developer focused on reliable backends, clear APIs and tooling that keeps teams fast.",
                "updatedAt": now,
            }),
        )
        .await?;

        self.put_singleton(
            SKILLS_KEY,
            json!({
                "skills": ["Rust", "TypeScript", "PostgreSQL", "Docker", "Git"],
                "updatedAt": now,
            }),
        )
        .await?;

        self.put_singleton(
            CONFIG_KEY,
            json!({
                "allowedEmail": allowed_email,
                "updatedAt": now,
            }),
        )
        .await?;

        for section in Section::ALL {
            let mut item = starter_item(section);
            item.insert("visible".to_string(), Value::Bool(true));
            item.insert("order".to_string(), Value::from(1));
            item.insert("createdAt".to_string(), now.clone());
            item.insert("updatedAt".to_string(), now.clone());

            let id = self.store.add(section.collection(), item).await?;
            info!(section = %section, id = %id, "Seeded starter item");
        }

        info!("Portfolio seeded");
        Ok(())
    }

    /// Empties the four sections and resets objective and skills.
    /// `config/auth` is left untouched. Returns the number of deleted documents.
    pub async fn clear(&self) -> Result<usize, MaintenanceError> {
        let collections = Section::ALL
            .iter()
            .map(|section| section.collection())
            .chain([OBJECTIVE_KEY.collection, SKILLS_KEY.collection]);

        let mut deleted = 0;
        for collection in collections {
            let documents = self
                .store
                .query(collection, DocumentQuery::default())
                .await?;
            for document in &documents {
                self.store.delete(collection, &document.id).await?;
            }
            info!(collection, count = documents.len(), "Cleared collection");
            deleted += documents.len();
        }

        let now = timestamp(Utc::now());
        self.put_singleton(OBJECTIVE_KEY, json!({ "content": "", "updatedAt": now }))
            .await?;
        self.put_singleton(SKILLS_KEY, json!({ "skills": [], "updatedAt": now }))
            .await?;

        info!(deleted, "Portfolio cleared, config/auth preserved");
        Ok(deleted)
    }

    async fn put_singleton(&self, key: SingletonKey, value: Value) -> Result<(), MaintenanceError> {
        self.store
            .set(key.collection, key.id, into_data(value))
            .await?;
        info!(document = %key, "Wrote singleton document");
        Ok(())
    }
}

fn into_data(value: Value) -> DocumentData {
    match value {
        Value::Object(map) => map,
        _ => DocumentData::new(),
    }
}

fn starter_item(section: Section) -> DocumentData {
    let value = match section {
        Section::Education => json!({
            "title": "BSc Computer Science",
            "institution": "State University",
            "location": "Remote",
            "startDate": "2016-09",
            "endDate": "2020-06",
            "description": "Coursework in algorithms, operating systems and distributed systems.",
        }),
        Section::Experiences => json!({
            "title": "Backend Engineer",
            "company": "Example Corp",
            "role": "Platform team",
            "location": "Remote",
            "startDate": "2020-07",
            "endDate": null,
            "description": "Designing and running HTTP services and data pipelines.",
            "technologies": ["Rust", "PostgreSQL", "Kubernetes"],
        }),
        Section::Projects => json!({
            "title": "Portfolio backend",
            "description": "The service rendering this page.",
            "technologies": ["Rust", "actix-web"],
            "link": "https://example.com/portfolio",
        }),
        Section::Publications => json!({
            "title": "Notes on ordering without a sort index",
            "description": "Article on stable in-memory ordering for filtered queries.",
            "link": "https://example.com/articles/ordering",
        }),
    };
    into_data(value)
}
