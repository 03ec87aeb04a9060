use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::parse_section;
use crate::modules::content::domain::entities::PortfolioItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/sections/{section}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("section" = String, Path, description = "Section name")),
    responses(
        (status = 200, description = "All items in display order", body = inline(SuccessResponse<Vec<PortfolioItem>>)),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse)
    )
)]
#[get("/api/admin/sections/{section}")]
pub async fn admin_get_section_items_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match parse_section(&path) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    ApiResponse::success(data.content.manage.all_items(section).await)
}
