use std::sync::Arc;

use crate::content::adapter::outgoing::InMemoryDocumentStore;
use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::service::PortfolioMaintenance;

pub const OWNER_EMAIL: &str = "owner@example.com";

/// In-memory store holding the singletons and one visible item per section.
pub async fn seeded_store() -> Arc<dyn DocumentStore> {
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    PortfolioMaintenance::new(store.clone())
        .seed(OWNER_EMAIL)
        .await
        .unwrap();
    store
}

pub fn empty_store() -> Arc<dyn DocumentStore> {
    Arc::new(InMemoryDocumentStore::new())
}
