use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::timetable;

/// DELETE /api/timetable/{id}
pub async fn remove(State(app_state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match timetable::Entity::delete_by_id(id).exec(app_state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Timetable slot not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<Empty>::success(
                Empty,
                "Timetable slot deleted successfully",
            )),
        ),
        Err(err) => {
            tracing::error!("failed to delete timetable slot {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to delete timetable slot")),
            )
        }
    }
}
