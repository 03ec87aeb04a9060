use actix_web::HttpResponse;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::ContentWriteError;
use crate::modules::content::domain::entities::Section;
use crate::shared::api::ApiResponse;

pub fn parse_section(raw: &str) -> Result<Section, HttpResponse> {
    raw.parse::<Section>().map_err(|e| {
        ApiResponse::not_found(
            "SECTION_NOT_FOUND",
            &format!("{e}. Expected one of education, experiences, projects, publications"),
        )
    })
}

pub fn write_error_response(err: ContentWriteError) -> HttpResponse {
    match err {
        ContentWriteError::Validation(violation) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &violation.to_string())
        }
        ContentWriteError::ItemNotFound => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found")
        }
        ContentWriteError::SingletonMissing(key) => ApiResponse::conflict(
            "SINGLETON_MISSING",
            &format!("Document {key} has not been provisioned"),
        ),
        ContentWriteError::Store(e) => {
            error!(error = %e, "Content write failed");
            ApiResponse::internal_error()
        }
    }
}
