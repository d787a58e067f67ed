use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use db::models::student;

/// Resolves the caller's login identity to their student profile, or
/// produces the error response to return as-is.
pub async fn resolve_student(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<student::Model, Response> {
    match student::Model::get_by_user_id(db, user_id).await {
        Ok(Some(profile)) => Ok(profile),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Student profile not found")),
        )
            .into_response()),
        Err(err) => {
            tracing::error!("failed to resolve student profile for user {user_id}: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to load student profile")),
            )
                .into_response())
        }
    }
}
