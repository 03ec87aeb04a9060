use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillsResponse {
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub skills: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Skill names in display order",
            body = inline(SuccessResponse<SkillsResponse>)
        )
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(SkillsResponse {
        skills: data.content.read.skills().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::seeded_store;

    #[actix_web::test]
    async fn test_get_skills_returns_seeded_list() {
        let app_state = TestAppStateBuilder::default()
            .with_store(seeded_store().await)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["skills"][0], "Rust");
    }

    #[actix_web::test]
    async fn test_get_skills_empty_without_document() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["skills"], json!([]));
    }
}
