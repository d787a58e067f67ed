//! Admin-only management routes. The `allow_admin` guard is applied by the
//! parent router in `routes::routes`.

pub mod common;
pub mod departments;
pub mod faculty;
pub mod sections;
pub mod students;
pub mod subjects;

use axum::Router;

use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest("/departments", departments::routes())
        .nest("/sections", sections::routes())
        .nest("/subjects", subjects::routes())
        .nest("/students", students::routes())
        .nest("/faculty", faculty::routes())
}
