use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::admin_sign_in::{
    AdminSignInError, AdminSignInRequest, IAdminSignInUseCase,
};
use crate::auth::application::use_cases::admin_sign_out::{
    AdminSignOutError, AdminSignOutRequest, IAdminSignOutUseCase,
};
use crate::content::application::ports::incoming::use_cases::{
    ContentWriteError, ManageContentUseCase,
};
use crate::content::application::ports::outgoing::{
    Document, DocumentData, DocumentQuery, DocumentStore, DocumentStoreError,
};
use crate::content::domain::entities::{
    NewPortfolioItem, PatchItemData, PortfolioItem, PortfolioSnapshot, Section,
};
use crate::media::application::domain::entities::{ImagePlaceholder, FALLBACK_BACKGROUND};
use crate::media::application::ports::incoming::use_cases::ImagePlaceholderUseCase;

// ============================================================================
// Auth
// ============================================================================

#[derive(Clone)]
pub struct StubAdminSignInUseCase {
    result: Result<AdminSession, AdminSignInError>,
}

impl StubAdminSignInUseCase {
    pub fn success(email: &str) -> Self {
        Self {
            result: Ok(AdminSession {
                token: "session-token".to_string(),
                email: email.to_string(),
                expires_at: Utc::now() + Duration::hours(8),
            }),
        }
    }

    pub fn error(err: AdminSignInError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IAdminSignInUseCase for StubAdminSignInUseCase {
    async fn execute(&self, _request: AdminSignInRequest) -> Result<AdminSession, AdminSignInError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubAdminSignOutUseCase {
    result: Result<(), AdminSignOutError>,
}

impl StubAdminSignOutUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: AdminSignOutError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IAdminSignOutUseCase for StubAdminSignOutUseCase {
    async fn execute(&self, _request: AdminSignOutRequest) -> Result<(), AdminSignOutError> {
        self.result.clone()
    }
}

// ============================================================================
// Content
// ============================================================================

/// Reads come back empty, every write fails with the configured error.
#[derive(Clone)]
pub struct FailingManageContentUseCase {
    error: ContentWriteError,
}

impl FailingManageContentUseCase {
    pub fn new(error: ContentWriteError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl ManageContentUseCase for FailingManageContentUseCase {
    async fn admin_snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot::default()
    }

    async fn all_items(&self, _section: Section) -> Vec<PortfolioItem> {
        Vec::new()
    }

    async fn create_item(
        &self,
        _section: Section,
        _item: NewPortfolioItem,
    ) -> Result<String, ContentWriteError> {
        Err(self.error.clone())
    }

    async fn update_item(
        &self,
        _section: Section,
        _id: &str,
        _patch: PatchItemData,
    ) -> Result<(), ContentWriteError> {
        Err(self.error.clone())
    }

    async fn set_visibility(
        &self,
        _section: Section,
        _id: &str,
        _visible: bool,
    ) -> Result<(), ContentWriteError> {
        Err(self.error.clone())
    }

    async fn delete_item(&self, _section: Section, _id: &str) -> Result<(), ContentWriteError> {
        Err(self.error.clone())
    }

    async fn update_objective(&self, _content: String) -> Result<(), ContentWriteError> {
        Err(self.error.clone())
    }

    async fn update_skills(&self, _skills: Vec<String>) -> Result<(), ContentWriteError> {
        Err(self.error.clone())
    }
}

/// Every call fails as if the database were down.
pub struct UnreachableDocumentStore;

fn unreachable_err() -> DocumentStoreError {
    DocumentStoreError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl DocumentStore for UnreachableDocumentStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, DocumentStoreError> {
        Err(unreachable_err())
    }

    async fn query(
        &self,
        _collection: &str,
        _query: DocumentQuery,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        Err(unreachable_err())
    }

    async fn add(&self, _collection: &str, _data: DocumentData) -> Result<String, DocumentStoreError> {
        Err(unreachable_err())
    }

    async fn set(
        &self,
        _collection: &str,
        _id: &str,
        _data: DocumentData,
    ) -> Result<(), DocumentStoreError> {
        Err(unreachable_err())
    }

    async fn update(
        &self,
        _collection: &str,
        _id: &str,
        _data: DocumentData,
    ) -> Result<(), DocumentStoreError> {
        Err(unreachable_err())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), DocumentStoreError> {
        Err(unreachable_err())
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Err(unreachable_err())
    }
}

// ============================================================================
// Media
// ============================================================================

/// Echoes the source back with a fixed background.
#[derive(Clone)]
pub struct StubImagePlaceholderUseCase {
    background: Option<String>,
}

impl StubImagePlaceholderUseCase {
    pub fn with_background(background: &str) -> Self {
        Self {
            background: Some(background.to_string()),
        }
    }

    pub fn unsampled() -> Self {
        Self { background: None }
    }
}

#[async_trait]
impl ImagePlaceholderUseCase for StubImagePlaceholderUseCase {
    async fn execute(&self, src: Option<&str>) -> ImagePlaceholder {
        ImagePlaceholder {
            src: src.unwrap_or_default().to_string(),
            background: self.background.clone(),
            fallback_background: FALLBACK_BACKGROUND.to_string(),
        }
    }
}
