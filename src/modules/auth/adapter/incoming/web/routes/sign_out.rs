use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::use_cases::admin_sign_out::{
    AdminSignOutError, AdminSignOutRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Ends the administrator's session at the identity provider.
/// The session token itself simply expires.
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = "auth",
    request_body = AdminSignOutRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (
            status = 502,
            description = "Identity provider unavailable",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "IDENTITY_PROVIDER_ERROR",
                    "message": "Identity provider is unavailable"
                }
            })
        )
    )
)]
#[post("/api/auth/sign-out")]
pub async fn admin_sign_out_handler(
    admin: AdminUser,
    req: web::Json<AdminSignOutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin_sign_out_use_case.execute(req.into_inner()).await {
        Ok(()) => {
            info!(email = %admin.email, session = %admin.session_id, "Admin session ended");
            ApiResponse::no_content()
        }
        Err(AdminSignOutError::Provider(e)) => {
            error!(error = %e, "Identity provider failed during sign-out");
            ApiResponse::bad_gateway(
                "IDENTITY_PROVIDER_ERROR",
                "Identity provider is unavailable",
            )
        }
    }
}
