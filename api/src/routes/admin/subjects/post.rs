use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::{department, subject};

use super::common::{SubjectRequest, SubjectResponse};

/// POST /api/admin/subjects
pub async fn create(
    State(app_state): State<AppState>,
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

    match department::Entity::find_by_id(req.department_id)
        .one(app_state.db())
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error("Department not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to verify department {}: {err}", req.department_id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create subject")),
            )
                .into_response();
        }
    }

    let active = subject::ActiveModel {
        department_id: Set(req.department_id),
        semester: Set(req.semester),
        name: Set(req.name.trim().to_string()),
        code: Set(req.code.trim().to_uppercase()),
        ..Default::default()
    };

    match active.insert(app_state.db()).await {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubjectResponse::from(model),
                "Subject created successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to create subject: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create subject")),
            )
                .into_response()
        }
    }
}
