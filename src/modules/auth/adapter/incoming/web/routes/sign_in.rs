use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::auth::application::use_cases::admin_sign_in::{
    AdminSignInError, AdminSignInRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Exchanges an identity provider credential for an admin session.
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = "auth",
    request_body = AdminSignInRequest,
    responses(
        (
            status = 200,
            description = "Signed in as the allowlisted administrator",
            body = inline(SuccessResponse<AdminSession>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "email": "owner@example.com",
                    "expiresAt": "2026-10-16T18:00:00Z"
                }
            })
        ),
        (
            status = 401,
            description = "Credential rejected by the identity provider",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIAL",
                    "message": "Sign-in credential is invalid or expired"
                }
            })
        ),
        (
            status = 403,
            description = "Email is not the allowlisted address; the provider session was ended",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_NOT_AUTHORIZED",
                    "message": "This account is not authorized for admin access"
                }
            })
        ),
        (
            status = 502,
            description = "Identity provider unavailable",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Session could not be issued",
            body = ErrorResponse
        )
    )
)]
#[post("/api/auth/sign-in")]
pub async fn admin_sign_in_handler(
    req: web::Json<AdminSignInRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin_sign_in_use_case.execute(req.into_inner()).await {
        Ok(session) => ApiResponse::success(session),

        Err(AdminSignInError::InvalidCredential) => ApiResponse::unauthorized(
            "INVALID_CREDENTIAL",
            "Sign-in credential is invalid or expired",
        ),

        Err(AdminSignInError::NotAuthorized) => ApiResponse::forbidden(
            "EMAIL_NOT_AUTHORIZED",
            "This account is not authorized for admin access",
        ),

        Err(AdminSignInError::Provider(e)) => {
            error!(error = %e, "Identity provider failed during sign-in");
            ApiResponse::bad_gateway(
                "IDENTITY_PROVIDER_ERROR",
                "Identity provider is unavailable",
            )
        }

        Err(AdminSignInError::TokenIssue(e)) => {
            error!(error = %e, "Failed to issue admin session");
            ApiResponse::internal_error()
        }
    }
}
