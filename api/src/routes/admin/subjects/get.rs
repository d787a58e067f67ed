use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{EntityTrait, QueryOrder};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::subject;

use super::common::SubjectResponse;

/// GET /api/admin/subjects
///
/// Subjects with their owning department, ordered by semester then code.
pub async fn list(State(app_state): State<AppState>) -> impl IntoResponse {
    match subject::Entity::find()
        .find_also_related(db::models::department::Entity)
        .order_by_asc(subject::Column::Semester)
        .order_by_asc(subject::Column::Code)
        .all(app_state.db())
        .await
    {
        Ok(rows) => {
            let data: Vec<SubjectResponse> = rows
                .into_iter()
                .map(|(s, d)| SubjectResponse::from_model(s, d))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Subjects retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to list subjects: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch subjects")),
            )
                .into_response()
        }
    }
}
