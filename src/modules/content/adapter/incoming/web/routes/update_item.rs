use actix_web::{patch, web, Responder};
use tracing::info;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::{
    parse_section, write_error_response,
};
use crate::modules::content::domain::entities::PatchItemData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are kept, `null` clears an optional field.
#[utoipa::path(
    patch,
    path = "/api/admin/sections/{section}/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(
        ("section" = String, Path, description = "Section name"),
        ("id" = String, Path, description = "Item id")
    ),
    request_body(
        content = crate::modules::content::domain::entities::NewPortfolioItem,
        description = "Any subset of item fields"
    ),
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (
            status = 404,
            description = "Unknown section or item",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "ITEM_NOT_FOUND", "message": "Item not found" }
            })
        ),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[patch("/api/admin/sections/{section}/{id}")]
pub async fn update_item_handler(
    admin: AdminUser,
    path: web::Path<(String, String)>,
    req: web::Json<PatchItemData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    let section = match parse_section(&section) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data
        .content
        .manage
        .update_item(section, &id, req.into_inner())
        .await
    {
        Ok(()) => {
            info!(section = %section, id = %id, admin = %admin.email, "Item updated");
            ApiResponse::no_content()
        }
        Err(err) => write_error_response(err),
    }
}
