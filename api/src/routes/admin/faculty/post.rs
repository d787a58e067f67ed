use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::admin::common::is_unique_violation;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::faculty;

use super::common::{CreateFacultyRequest, FacultyResponse};

/// POST /api/admin/faculty
///
/// Creates the login identity and the faculty profile together.
pub async fn create(
    State(app_state): State<AppState>,
    Json(req): Json<CreateFacultyRequest>,
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

    let result = faculty::Model::create_with_identity(
        app_state.db(),
        req.email.trim(),
        &req.password,
        req.employee_id.trim(),
        req.name.trim(),
        req.department_id,
    )
    .await;

    match result {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                FacultyResponse::from(model),
                "Faculty member created successfully",
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
        Err(err) => {
            tracing::error!("failed to create faculty member: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(
                    "Failed to create faculty member",
                )),
            )
                .into_response()
        }
    }
}
