use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ObjectiveResponse {
    #[schema(example = "Backend developer building reliable services.")]
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/objective",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Career objective, or the default text when none is stored",
            body = inline(SuccessResponse<ObjectiveResponse>)
        )
    )
)]
#[get("/api/objective")]
pub async fn get_objective_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(ObjectiveResponse {
        content: data.content.read.objective().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_get_objective_falls_back_when_missing() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_objective_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/objective").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["content"],
            "Passionate developer creating innovative solutions..."
        );
    }
}
