// src/modules/content/application/ports/outgoing/document_store.rs

use async_trait::async_trait;
use serde_json::{Map, Value};

//
// ──────────────────────────────────────────────────────────
// Documents
// ──────────────────────────────────────────────────────────
//

pub type DocumentData = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: DocumentData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

/// Equality filters are ANDed. Ordering compares the field numerically;
/// documents without it sort last, ties keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub filters: Vec<(String, Value)>,
    pub order_by: Option<OrderBy>,
}

impl DocumentQuery {
    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push((field.to_string(), value.into()));
        self
    }

    pub fn order_by_asc(mut self, field: &str) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction: SortDirection::Asc,
        });
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentStoreError {
    /// Raised by `update` when the target document does not exist.
    #[error("Document not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, DocumentStoreError>;

    async fn query(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, DocumentStoreError>;

    /// Inserts under a fresh id and returns it.
    async fn add(&self, collection: &str, data: DocumentData) -> Result<String, DocumentStoreError>;

    /// Creates or fully replaces the document.
    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: DocumentData,
    ) -> Result<(), DocumentStoreError>;

    /// Shallow merge into an existing document.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: DocumentData,
    ) -> Result<(), DocumentStoreError>;

    /// Deleting a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;

    async fn ping(&self) -> Result<(), DocumentStoreError>;
}
