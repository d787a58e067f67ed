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
use db::models::student;

use super::common::{StudentResponse, UpdateStudentRequest};

/// PUT /api/admin/students/{id}
///
/// Updates profile fields only; the login identity is untouched.
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
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

    let existing = match student::Entity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Student not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to load student {id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update student")),
            )
                .into_response();
        }
    };

    let mut active = existing.into_active_model();
    active.roll_no = Set(req.roll_no.trim().to_string());
    active.name = Set(req.name.trim().to_string());
    active.section_id = Set(req.section_id);
    active.admission_year = Set(req.admission_year);

    match active.update(app_state.db()).await {
        Ok(model) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(model),
                "Student updated successfully",
            )),
        )
            .into_response(),
        Err(err) if is_unique_violation(&err, "students.roll_no") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "A student with this roll number already exists",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to update student {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update student")),
            )
                .into_response()
        }
    }
}
