use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::{
    parse_section, write_error_response,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetVisibilityRequest {
    pub visible: bool,
}

#[utoipa::path(
    patch,
    path = "/api/admin/sections/{section}/{id}/visibility",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(
        ("section" = String, Path, description = "Section name"),
        ("id" = String, Path, description = "Item id")
    ),
    request_body = SetVisibilityRequest,
    responses(
        (status = 204, description = "Visibility changed"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown section or item", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[patch("/api/admin/sections/{section}/{id}/visibility")]
pub async fn set_visibility_handler(
    admin: AdminUser,
    path: web::Path<(String, String)>,
    req: web::Json<SetVisibilityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    let section = match parse_section(&section) {
        Ok(section) => section,
        Err(resp) => return resp,
    };
    let visible = req.visible;

    match data
        .content
        .manage
        .set_visibility(section, &id, visible)
        .await
    {
        Ok(()) => {
            info!(section = %section, id = %id, visible, admin = %admin.email, "Visibility changed");
            ApiResponse::no_content()
        }
        Err(err) => write_error_response(err),
    }
}
