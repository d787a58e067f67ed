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
use db::models::faculty;

use super::common::{FacultyResponse, UpdateFacultyRequest};

/// PUT /api/admin/faculty/{id}
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFacultyRequest>,
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

    let existing = match faculty::Entity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Faculty member not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to load faculty member {id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(
                    "Failed to update faculty member",
                )),
            )
                .into_response();
        }
    };

    let mut active = existing.into_active_model();
    active.employee_id = Set(req.employee_id.trim().to_string());
    active.name = Set(req.name.trim().to_string());
    active.department_id = Set(req.department_id);

    match active.update(app_state.db()).await {
        Ok(model) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FacultyResponse::from(model),
                "Faculty member updated successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to update faculty member {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(
                    "Failed to update faculty member",
                )),
            )
                .into_response()
        }
    }
}
