use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ActiveModelTrait, Set};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::admin::common::is_unique_violation;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::department;

use super::common::{DepartmentRequest, DepartmentResponse};

/// POST /api/admin/departments
///
/// Creates a department. The code must be unique across departments.
pub async fn create(
    State(app_state): State<AppState>,
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

    let active = department::ActiveModel {
        name: Set(req.name.trim().to_string()),
        code: Set(req.code.trim().to_uppercase()),
        ..Default::default()
    };

    match active.insert(app_state.db()).await {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                DepartmentResponse::from(model),
                "Department created successfully",
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
            tracing::error!("failed to create department: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create department")),
            )
                .into_response()
        }
    }
}
