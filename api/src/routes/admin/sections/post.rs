use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::{department, section};

use super::common::{SectionRequest, SectionResponse};

/// POST /api/admin/sections
pub async fn create(
    State(app_state): State<AppState>,
    Json(req): Json<SectionRequest>,
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
                Json(ApiResponse::<Empty>::error("Failed to create section")),
            )
                .into_response();
        }
    }

    let active = section::ActiveModel {
        department_id: Set(req.department_id),
        year: Set(req.year),
        name: Set(req.name.trim().to_string()),
        ..Default::default()
    };

    match active.insert(app_state.db()).await {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SectionResponse::from(model),
                "Section created successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to create section: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create section")),
            )
                .into_response()
        }
    }
}
