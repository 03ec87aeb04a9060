use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::content::adapter::outgoing::document_id::generate_document_id;
use crate::modules::content::application::ports::outgoing::{
    Document, DocumentData, DocumentQuery, DocumentStore, DocumentStoreError, OrderBy,
    SortDirection,
};

/// Process-local store for development and tests. Each collection keeps its
/// documents in insertion order; `set` on an existing id replaces in place.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filters(data: &DocumentData, filters: &[(String, Value)]) -> bool {
    filters
        .iter()
        .all(|(field, expected)| data.get(field) == Some(expected))
}

/// Numeric comparison; documents without a number in the field sort as 0.
fn compare_by(a: &Document, b: &Document, order_by: &OrderBy) -> Ordering {
    let key = |doc: &Document| {
        doc.data
            .get(&order_by.field)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    };

    let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
    match order_by.direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn query(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;
        let mut documents: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches_filters(&doc.data, &query.filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order_by) = &query.order_by {
            documents.sort_by(|a, b| compare_by(a, b, order_by));
        }
        Ok(documents)
    }

    async fn add(&self, collection: &str, data: DocumentData) -> Result<String, DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        let mut id = generate_document_id();
        while docs.iter().any(|doc| doc.id == id) {
            id = generate_document_id();
        }

        docs.push(Document {
            id: id.clone(),
            data,
        });
        Ok(id)
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: DocumentData,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|doc| doc.id == id) {
            Some(existing) => existing.data = data,
            None => docs.push(Document {
                id: id.to_string(),
                data,
            }),
        }
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: DocumentData,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or(DocumentStoreError::NotFound)?;

        for (field, value) in data {
            existing.data.insert(field, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Ok(())
    }
}
