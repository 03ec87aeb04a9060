use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::document_store::DocumentStoreError;
use crate::modules::content::domain::entities::{
    NewPortfolioItem, PatchItemData, PortfolioItem, PortfolioSnapshot, Section,
};
use crate::modules::content::domain::policies::ItemPolicyViolation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentWriteError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ItemPolicyViolation),

    #[error("Item not found")]
    ItemNotFound,

    #[error("Document {0} does not exist")]
    SingletonMissing(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<DocumentStoreError> for ContentWriteError {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::NotFound => ContentWriteError::ItemNotFound,
            DocumentStoreError::DatabaseError(msg) => ContentWriteError::Store(msg),
            DocumentStoreError::SerializationError(msg) => ContentWriteError::Store(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ManageContentUseCase: Send + Sync {
    /// Every item regardless of visibility, plus objective and skills.
    async fn admin_snapshot(&self) -> PortfolioSnapshot;

    async fn all_items(&self, section: Section) -> Vec<PortfolioItem>;

    async fn create_item(
        &self,
        section: Section,
        item: NewPortfolioItem,
    ) -> Result<String, ContentWriteError>;

    async fn update_item(
        &self,
        section: Section,
        id: &str,
        patch: PatchItemData,
    ) -> Result<(), ContentWriteError>;

    async fn set_visibility(
        &self,
        section: Section,
        id: &str,
        visible: bool,
    ) -> Result<(), ContentWriteError>;

    async fn delete_item(&self, section: Section, id: &str) -> Result<(), ContentWriteError>;

    async fn update_objective(&self, content: String) -> Result<(), ContentWriteError>;

    async fn update_skills(&self, skills: Vec<String>) -> Result<(), ContentWriteError>;
}
