use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::admin::common::is_unique_violation;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::student;

use super::common::{CreateStudentRequest, StudentResponse};

/// POST /api/admin/students
///
/// Creates the login identity and the student profile together. A failed
/// profile insert rolls the identity back.
pub async fn create(
    State(app_state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
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

    let result = student::Model::create_with_identity(
        app_state.db(),
        req.email.trim(),
        &req.password,
        req.roll_no.trim(),
        req.name.trim(),
        req.section_id,
        req.admission_year,
    )
    .await;

    match result {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from(model),
                "Student created successfully",
            )),
        )
            .into_response(),
        Err(err) if is_unique_violation(&err, "users.email") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "A user with this email already exists",
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
            tracing::error!("failed to create student: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create student")),
            )
                .into_response()
        }
    }
}
