//! Timetable routes. Reads are open to any authenticated user so faculty
//! and students can view schedules; writes are admin-only.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::state::AppState;

pub fn timetable_routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(get::list))
        .route("/section/{section_id}", get(get::by_section))
        .route_layer(from_fn(allow_authenticated));

    let writes = Router::new()
        .route("/", post(post::create))
        .route("/{id}", put(put::update).delete(delete::remove))
        .route_layer(from_fn(allow_admin));

    reads.merge(writes)
}
