//! Route assembly for the whole API surface.
//!
//! Everything is nested under `/api` by `main.rs`:
//!
//! - `/health`       public liveness probe
//! - `/admin/*`      admin-only CRUD for departments, sections, subjects,
//!                   students and faculty
//! - `/stats/*`      admin-only dashboard aggregates
//! - `/timetable/*`  reads for any authenticated user, writes admin-only
//! - `/faculty/*`    faculty-only class, attendance and marks operations
//! - `/student/*`    student-only self-service views

pub mod admin;
pub mod faculty;
pub mod health;
pub mod stats;
pub mod student;
pub mod timetable;

use axum::{Router, middleware::from_fn};

use crate::auth::guards::{allow_admin, allow_faculty, allow_student};
use crate::state::AppState;

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest(
            "/admin",
            admin::admin_routes().route_layer(from_fn(allow_admin)),
        )
        .nest(
            "/stats",
            stats::stats_routes().route_layer(from_fn(allow_admin)),
        )
        .nest("/timetable", timetable::timetable_routes())
        .nest(
            "/faculty",
            faculty::faculty_routes().route_layer(from_fn(allow_faculty)),
        )
        .nest(
            "/student",
            student::student_routes().route_layer(from_fn(allow_student)),
        )
        .with_state(app_state)
}
