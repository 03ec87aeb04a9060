use async_trait::async_trait;

use crate::modules::content::domain::entities::{PortfolioItem, PortfolioSnapshot, Section};

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//
// Reads never fail towards the caller: store errors are logged and the
// affected part degrades to an empty list or the default objective.
//

#[async_trait]
pub trait ReadPortfolioUseCase: Send + Sync {
    /// Visible items of every section plus objective and skills.
    async fn public_portfolio(&self) -> PortfolioSnapshot;

    async fn visible_items(&self, section: Section) -> Vec<PortfolioItem>;

    async fn objective(&self) -> String;

    async fn skills(&self) -> Vec<String>;
}
