use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::DocumentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    document_store: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Pings the document store
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<dyn DocumentStore>>) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            document_store: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                document_store: "unhealthy",
            })
        }
    }
}
