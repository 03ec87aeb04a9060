use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::admin_sign_in::{AdminSignInError, IAdminSignInUseCase};
use crate::auth::application::use_cases::admin_sign_out::IAdminSignOutUseCase;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::{
    ManageContentUseCase, ReadPortfolioUseCase,
};
use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::service::ContentRepository;
use crate::media::application::ports::incoming::use_cases::ImagePlaceholderUseCase;
use crate::tests::support::fixtures::empty_store;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Content use cases default to a real `ContentRepository` over `store`,
/// so route tests exercise the whole read/write path unless overridden.
pub struct TestAppStateBuilder {
    store: Arc<dyn DocumentStore>,
    read_portfolio: Option<Arc<dyn ReadPortfolioUseCase + Send + Sync>>,
    manage_content: Option<Arc<dyn ManageContentUseCase + Send + Sync>>,
    admin_sign_in: Option<Arc<dyn IAdminSignInUseCase + Send + Sync>>,
    admin_sign_out: Option<Arc<dyn IAdminSignOutUseCase + Send + Sync>>,
    image_placeholder: Option<Arc<dyn ImagePlaceholderUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: empty_store(),
            read_portfolio: None,
            manage_content: None,
            admin_sign_in: Some(Arc::new(StubAdminSignInUseCase::error(
                AdminSignInError::NotAuthorized,
            ))),
            admin_sign_out: Some(Arc::new(StubAdminSignOutUseCase::success())),
            image_placeholder: Some(Arc::new(StubImagePlaceholderUseCase::unsampled())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_read_portfolio(
        mut self,
        uc: impl ReadPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.read_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_manage_content(
        mut self,
        uc: impl ManageContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.manage_content = Some(Arc::new(uc));
        self
    }

    pub fn with_admin_sign_in(
        mut self,
        uc: impl IAdminSignInUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_sign_in = Some(Arc::new(uc));
        self
    }

    pub fn with_admin_sign_out(
        mut self,
        uc: impl IAdminSignOutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_sign_out = Some(Arc::new(uc));
        self
    }

    pub fn with_image_placeholder(
        mut self,
        uc: impl ImagePlaceholderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.image_placeholder = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let repository = Arc::new(ContentRepository::new(self.store));

        let read: Arc<dyn ReadPortfolioUseCase + Send + Sync> = match self.read_portfolio {
            Some(uc) => uc,
            None => repository.clone(),
        };
        let manage: Arc<dyn ManageContentUseCase + Send + Sync> = match self.manage_content {
            Some(uc) => uc,
            None => repository,
        };

        web::Data::new(AppState {
            content: ContentUseCases { read, manage },
            admin_sign_in_use_case: self.admin_sign_in.unwrap(),
            admin_sign_out_use_case: self.admin_sign_out.unwrap(),
            image_placeholder_use_case: self.image_placeholder.unwrap(),
        })
    }
}
