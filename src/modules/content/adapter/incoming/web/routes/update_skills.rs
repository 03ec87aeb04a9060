use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::write_error_response;
use crate::modules::content::domain::policies::parse_skills_input;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Either an explicit list or the raw comma-separated editor text.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum UpdateSkillsRequest {
    List { skills: Vec<String> },
    Text { text: String },
}

impl UpdateSkillsRequest {
    fn into_skills(self) -> Vec<String> {
        match self {
            UpdateSkillsRequest::List { skills } => skills,
            UpdateSkillsRequest::Text { text } => parse_skills_input(&text),
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/skills",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = UpdateSkillsRequest,
    responses(
        (status = 204, description = "Skills replaced"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 409, description = "The skills document was never provisioned", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[put("/api/admin/skills")]
pub async fn update_skills_handler(
    admin: AdminUser,
    req: web::Json<UpdateSkillsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skills = req.into_inner().into_skills();
    let count = skills.len();

    match data.content.manage.update_skills(skills).await {
        Ok(()) => {
            info!(admin = %admin.email, count, "Skills updated");
            ApiResponse::no_content()
        }
        Err(err) => write_error_response(err),
    }
}
