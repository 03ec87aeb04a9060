use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    ManageContentUseCase, ReadPortfolioUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub read: Arc<dyn ReadPortfolioUseCase + Send + Sync>,
    pub manage: Arc<dyn ManageContentUseCase + Send + Sync>,
}
