use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::SuccessResponse;
use crate::modules::media::application::domain::entities::ImagePlaceholder;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PlaceholderQuery {
    /// Image reference as stored on an item: URL, web-root path or local path.
    pub src: Option<String>,
}

/// Background color to show behind an image while it loads.
#[utoipa::path(
    get,
    path = "/api/media/placeholder",
    tag = "media",
    params(PlaceholderQuery),
    responses(
        (
            status = 200,
            description = "Normalized source plus sampled and fallback backgrounds",
            body = inline(SuccessResponse<ImagePlaceholder>),
            example = json!({
                "success": true,
                "data": {
                    "src": "/projects/cover.png",
                    "background": "rgb(255, 0, 0)",
                    "fallbackBackground": "rgb(243, 244, 246)"
                }
            })
        )
    )
)]
#[get("/api/media/placeholder")]
pub async fn get_placeholder_handler(
    query: web::Query<PlaceholderQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let placeholder = data
        .image_placeholder_use_case
        .execute(query.src.as_deref())
        .await;

    ApiResponse::success(placeholder)
}
