//! Dashboard aggregates. Admin-only; the guard is applied by the parent
//! router.

pub mod get;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(get::admin_overview))
        .route("/departments", get(get::department_breakdown))
}
