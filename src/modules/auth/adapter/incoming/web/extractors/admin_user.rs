use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ADMIN_TOKEN_TYPE};
use crate::shared::api::ApiResponse;

/// An administrator holding a valid session token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
    pub session_id: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider missing from app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != ADMIN_TOKEN_TYPE {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AdminUser {
                    email: claims.sub,
                    session_id: claims.jti,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse, Responder};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::Value;

    use crate::auth::application::ports::outgoing::token_provider::TokenClaims;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider, TEST_JWT_SECRET};

    #[get("/whoami")]
    async fn whoami(admin: AdminUser) -> impl Responder {
        HttpResponse::Ok().body(admin.email)
    }

    macro_rules! whoami_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_token_provider()))
                    .service(whoami),
            )
            .await
        };
    }

    async fn error_code(resp: actix_web::dev::ServiceResponse) -> String {
        let body: Value = test::read_body_json(resp).await;
        body["error"]["code"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn valid_admin_token_is_accepted() {
        let app = whoami_app!();

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "owner@example.com");
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = whoami_app!();

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn garbage_token_is_invalid() {
        let app = whoami_app!();

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn foreign_token_type_is_rejected() {
        let now = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "owner@example.com".to_string(),
            jti: "session".to_string(),
            exp: now + 600,
            iat: now,
            nbf: now,
            token_type: "preview".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap();

        let app = whoami_app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn missing_token_provider_is_internal_error() {
        let app = test::init_service(App::new().service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", admin_bearer("owner@example.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
