use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::content::domain::entities::PortfolioSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Everything the public page renders, with hidden items left out.
/// Never fails: unreachable parts come back empty.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Objective, visible items of every section and skills",
            body = inline(SuccessResponse<PortfolioSnapshot>)
        )
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.read.public_portfolio().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::seeded_store;
    use crate::tests::support::stubs::UnreachableDocumentStore;

    #[actix_web::test]
    async fn test_get_portfolio_returns_visible_content() {
        let app_state = TestAppStateBuilder::default()
            .with_store(seeded_store().await)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_portfolio_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert!(data["objective"].as_str().is_some_and(|s| !s.is_empty()));
        for section in ["education", "experiences", "projects", "publications"] {
            assert_eq!(data[section].as_array().unwrap().len(), 1, "{section}");
        }
        assert!(!data["skills"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_portfolio_degrades_when_store_is_down() {
        let app_state = TestAppStateBuilder::default()
            .with_store(Arc::new(UnreachableDocumentStore))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_portfolio_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["objective"],
            "Passionate developer creating innovative solutions..."
        );
        assert_eq!(body["data"]["projects"], serde_json::json!([]));
        assert_eq!(body["data"]["skills"], serde_json::json!([]));
    }
}
