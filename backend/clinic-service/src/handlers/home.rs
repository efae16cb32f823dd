use crate::app_state::{AppState, SERVICE_NAME};
use crate::error::Result;
use actix_web::{web, HttpResponse};
use tera::Context;

pub async fn home(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.templates.page("home.html", &Context::new())
}

/// Liveness plus a round-trip to the store
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "service": SERVICE_NAME,
            }))
        }
    }
}
