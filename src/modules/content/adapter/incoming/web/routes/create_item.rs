use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::{
    parse_section, write_error_response,
};
use crate::modules::content::domain::entities::NewPortfolioItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedItemResponse {
    #[schema(example = "k3Jd8aQz01LmNpXy4TbW")]
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/sections/{section}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("section" = String, Path, description = "Section name")),
    request_body = NewPortfolioItem,
    responses(
        (status = 201, description = "Item created", body = inline(SuccessResponse<CreatedItemResponse>)),
        (
            status = 400,
            description = "Field validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "link must be an http or https URL"
                }
            })
        ),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[post("/api/admin/sections/{section}")]
pub async fn create_item_handler(
    admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<NewPortfolioItem>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match parse_section(&path) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data
        .content
        .manage
        .create_item(section, req.into_inner())
        .await
    {
        Ok(id) => {
            info!(section = %section, id = %id, admin = %admin.email, "Item created");
            ApiResponse::created(CreatedItemResponse { id })
        }
        Err(err) => write_error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::content::application::ports::incoming::use_cases::{
        ContentWriteError, ManageContentUseCase,
    };
    use crate::content::application::service::ContentRepository;
    use crate::content::domain::entities::Section;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::fixtures::empty_store;
    use crate::tests::support::stubs::FailingManageContentUseCase;

    #[actix_web::test]
    async fn test_create_item_success() {
        let store = empty_store();
        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sections/experiences")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .set_json(json!({
                "title": "Staff Engineer",
                "company": "Acme",
                "startDate": "2023-01",
                "technologies": ["Rust"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let items = ContentRepository::new(store)
            .all_items(Section::Experiences)
            .await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].company.as_deref(), Some("Acme"));
        assert!(items[0].visible);
        assert_eq!(items[0].created_at, items[0].updated_at);
    }

    #[actix_web::test]
    async fn test_create_item_validation_error() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sections/projects")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .set_json(json!({ "title": "x", "link": "ftp://example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_item_store_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_manage_content(FailingManageContentUseCase::new(ContentWriteError::Store(
                "connection reset".to_string(),
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sections/projects")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .set_json(json!({ "title": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_create_item_unknown_section() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sections/blog")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .set_json(json!({ "title": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
