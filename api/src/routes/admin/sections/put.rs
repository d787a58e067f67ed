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
use db::models::section;

use super::common::{SectionRequest, SectionResponse};

/// PUT /api/admin/sections/{id}
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
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

    let existing = match section::Entity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Section not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to load section {id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update section")),
            )
                .into_response();
        }
    };

    let mut active = existing.into_active_model();
    active.department_id = Set(req.department_id);
    active.year = Set(req.year);
    active.name = Set(req.name.trim().to_string());

    match active.update(app_state.db()).await {
        Ok(model) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SectionResponse::from(model),
                "Section updated successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to update section {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update section")),
            )
                .into_response()
        }
    }
}
