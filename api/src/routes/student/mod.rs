//! Student self-service routes; every view is scoped to the caller's own
//! profile. The `allow_student` guard is applied by the parent router.

pub mod common;
pub mod get;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get::profile))
        .route("/attendance", get(get::attendance_view))
        .route("/marks", get(get::marks_view))
        .route("/timetable", get(get::timetable_view))
}
