mod manage_content;
mod read_portfolio;

pub use manage_content::{ContentWriteError, ManageContentUseCase};
pub use read_portfolio::ReadPortfolioUseCase;
