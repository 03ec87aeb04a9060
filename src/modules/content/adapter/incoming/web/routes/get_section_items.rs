use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::routes::section_path::parse_section;
use crate::modules::content::domain::entities::PortfolioItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/sections/{section}",
    tag = "portfolio",
    params(
        ("section" = String, Path, description = "education | experiences | projects | publications")
    ),
    responses(
        (
            status = 200,
            description = "Visible items in display order",
            body = inline(SuccessResponse<Vec<PortfolioItem>>)
        ),
        (
            status = 404,
            description = "Unknown section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SECTION_NOT_FOUND",
                    "message": "Unknown section: hobbies. Expected one of education, experiences, projects, publications"
                }
            })
        )
    )
)]
#[get("/api/sections/{section}")]
pub async fn get_section_items_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match parse_section(&path) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    ApiResponse::success(data.content.read.visible_items(section).await)
}
