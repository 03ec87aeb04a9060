use actix_web::{delete, web, Responder};
use tracing::info;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::section_path::{
    parse_section, write_error_response,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Hard delete. Deleting an id that does not exist succeeds.
#[utoipa::path(
    delete,
    path = "/api/admin/sections/{section}/{id}",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(
        ("section" = String, Path, description = "Section name"),
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[delete("/api/admin/sections/{section}/{id}")]
pub async fn delete_item_handler(
    admin: AdminUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    let section = match parse_section(&section) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data.content.manage.delete_item(section, &id).await {
        Ok(()) => {
            info!(section = %section, id = %id, admin = %admin.email, "Item deleted");
            ApiResponse::no_content()
        }
        Err(err) => write_error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::content::application::ports::incoming::use_cases::{
        ContentWriteError, ManageContentUseCase,
    };
    use crate::content::application::service::ContentRepository;
    use crate::content::domain::entities::Section;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::fixtures::seeded_store;
    use crate::tests::support::stubs::FailingManageContentUseCase;

    #[actix_web::test]
    async fn test_delete_item_removes_it() {
        let store = seeded_store().await;
        let repo = ContentRepository::new(store.clone());
        let id = repo.all_items(Section::Experiences).await[0].id.clone();

        let app_state = TestAppStateBuilder::default().with_store(store).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_item_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/sections/experiences/{id}"))
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        assert!(repo
            .all_items(Section::Experiences)
            .await
            .iter()
            .all(|item| item.id != id));
    }

    #[actix_web::test]
    async fn test_delete_item_store_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_manage_content(FailingManageContentUseCase::new(ContentWriteError::Store(
                "timeout".to_string(),
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_item_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/sections/projects/abc")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
