use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::{ProfileDeleteError, student};

/// DELETE /api/admin/students/{id}
///
/// Removes the profile first, then the login identity. A failed identity
/// delete leaves the profile gone and reports the orphaned identity.
pub async fn remove(State(app_state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match student::Model::delete_with_identity(app_state.db(), id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<Empty>::success(
                Empty,
                "Student deleted successfully",
            )),
        ),
        Err(ProfileDeleteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Student not found")),
        ),
        Err(ProfileDeleteError::IdentityCleanup(err)) => {
            tracing::error!("student {id} deleted but identity cleanup failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(
                    "Student deleted but login removal failed",
                )),
            )
        }
        Err(ProfileDeleteError::Db(err)) => {
            tracing::error!("failed to delete student {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to delete student")),
            )
        }
    }
}
