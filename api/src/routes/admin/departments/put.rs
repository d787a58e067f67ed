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
use crate::routes::admin::common::is_unique_violation;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::department;

use super::common::{DepartmentRequest, DepartmentResponse};

/// PUT /api/admin/departments/{id}
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<DepartmentRequest>,
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

    let existing = match department::Entity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Department not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to load department {id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update department")),
            )
                .into_response();
        }
    };

    let mut active = existing.into_active_model();
    active.name = Set(req.name.trim().to_string());
    active.code = Set(req.code.trim().to_uppercase());

    match active.update(app_state.db()).await {
        Ok(model) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                DepartmentResponse::from(model),
                "Department updated successfully",
            )),
        )
            .into_response(),
        Err(err) if is_unique_violation(&err, "departments.code") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "A department with this code already exists",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to update department {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update department")),
            )
                .into_response()
        }
    }
}
