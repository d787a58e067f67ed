//! Faculty-facing routes. The `allow_faculty` guard is applied by the
//! parent router; handlers additionally resolve the caller's faculty
//! profile and, for section-scoped operations, verify a timetable
//! assignment to that section.

pub mod common;
pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn faculty_routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(get::classes))
        .route("/students/{section_id}", get(get::students_by_section))
        .route("/attendance", post(post::mark_attendance))
        .route("/attendance/{subject_id}", get(get::attendance_by_subject))
        .route("/marks", post(post::enter_marks))
        .route("/marks/{subject_id}", get(get::marks_by_subject))
}
