use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::write_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateObjectiveRequest {
    #[schema(example = "Backend developer building reliable services.")]
    pub content: String,
}

#[utoipa::path(
    put,
    path = "/api/admin/objective",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = UpdateObjectiveRequest,
    responses(
        (status = 204, description = "Objective replaced"),
        (status = 400, description = "Content too long", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (
            status = 409,
            description = "The objective document was never provisioned",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SINGLETON_MISSING",
                    "message": "Document objective/main has not been provisioned"
                }
            })
        ),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[put("/api/admin/objective")]
pub async fn update_objective_handler(
    admin: AdminUser,
    req: web::Json<UpdateObjectiveRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .manage
        .update_objective(req.into_inner().content)
        .await
    {
        Ok(()) => {
            info!(admin = %admin.email, "Objective updated");
            ApiResponse::no_content()
        }
        Err(err) => write_error_response(err),
    }
}
