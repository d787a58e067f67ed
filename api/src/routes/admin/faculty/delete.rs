use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::{ProfileDeleteError, faculty};

/// DELETE /api/admin/faculty/{id}
///
/// Timetable slots assigned to the member are removed by cascade before
/// the login identity is deleted.
pub async fn remove(State(app_state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match faculty::Model::delete_with_identity(app_state.db(), id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<Empty>::success(
                Empty,
                "Faculty member deleted successfully",
            )),
        ),
        Err(ProfileDeleteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Faculty member not found")),
        ),
        Err(ProfileDeleteError::IdentityCleanup(err)) => {
            tracing::error!("faculty member {id} deleted but identity cleanup failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(
                    "Faculty member deleted but login removal failed",
                )),
            )
        }
        Err(ProfileDeleteError::Db(err)) => {
            tracing::error!("failed to delete faculty member {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(
                    "Failed to delete faculty member",
                )),
            )
        }
    }
}
