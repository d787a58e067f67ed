use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(ApiResponse::success(
        HealthStatus { status: "OK" },
        "College ERP API running",
    ))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
