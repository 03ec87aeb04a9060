use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::domain::entities::PortfolioSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Dashboard view: every item including hidden ones.
#[utoipa::path(
    get,
    path = "/api/admin/portfolio",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Full portfolio", body = inline(SuccessResponse<PortfolioSnapshot>)),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse)
    )
)]
#[get("/api/admin/portfolio")]
pub async fn admin_get_portfolio_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.content.manage.admin_snapshot().await)
}
