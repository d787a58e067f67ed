use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::timetable;

use super::common::{CONFLICT_MESSAGE, SlotResponse, UpdateSlotRequest};

/// PUT /api/timetable/{id}
///
/// Partial update. The conflict check only runs when the payload carries
/// section, day and period together; updates that change a subset of those
/// coordinates are written without a re-check.
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSlotRequest>,
) -> impl IntoResponse {
    if let Some(period) = req.period
        && !(1..=8).contains(&period)
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error("Period must be between 1 and 8")),
        )
            .into_response();
    }

    let existing = match timetable::Entity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Timetable slot not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("failed to load timetable slot {id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update timetable slot")),
            )
                .into_response();
        }
    };

    if let (Some(section_id), Some(day), Some(period)) = (req.section_id, req.day, req.period) {
        match timetable::Model::has_conflict(app_state.db(), section_id, day, period, Some(id))
            .await
        {
            Ok(true) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<Empty>::error(CONFLICT_MESSAGE)),
                )
                    .into_response();
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!("conflict check failed: {err}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error("Failed to update timetable slot")),
                )
                    .into_response();
            }
        }
    }

    let mut active = existing.into_active_model();
    if let Some(section_id) = req.section_id {
        active.section_id = Set(section_id);
    }
    if let Some(subject_id) = req.subject_id {
        active.subject_id = Set(subject_id);
    }
    if let Some(faculty_id) = req.faculty_id {
        active.faculty_id = Set(faculty_id);
    }
    if let Some(day) = req.day {
        active.day = Set(day);
    }
    if let Some(period) = req.period {
        active.period = Set(period);
    }

    match active.update(app_state.db()).await {
        Ok(model) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SlotResponse::from(model),
                "Timetable slot updated successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to update timetable slot {id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to update timetable slot")),
            )
                .into_response()
        }
    }
}
