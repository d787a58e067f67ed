use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::subject;

use super::common::{SubjectRequest, SubjectResponse};

/// PUT /api/admin/subjects/{id}
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<SubjectRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format_validation_errors(
                &errors,
            ))),
        )
            .into_response();
    }

    let existing = match subject::Entity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Subject not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to load subject {id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update subject")),
            )
                .into_response();
        }
    };

    let mut active = existing.into_active_model();
    active.department_id = Set(req.department_id);
    active.semester = Set(req.semester);
    active.name = Set(req.name.trim().to_string());
    active.code = Set(req.code.trim().to_uppercase());

    match active.update(app_state.db()).await {
        Ok(model) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubjectResponse::from(model),
                "Subject updated successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to update subject {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update subject")),
            )
                .into_response()
        }
    }
}
