use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ActiveModelTrait, Set};
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::timetable;

use super::common::{CONFLICT_MESSAGE, CreateSlotRequest, SlotResponse};

/// POST /api/timetable
///
/// The slot is rejected when the section already has a class at the same
/// day and period. The check and the insert are separate statements, so a
/// concurrent create can slip between them; a single scheduling operator
/// is assumed.
pub async fn create(
    State(app_state): State<AppState>,
    Json(req): Json<CreateSlotRequest>,
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

    match timetable::Model::has_conflict(app_state.db(), req.section_id, req.day, req.period, None)
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
                Json(ApiResponse::<Empty>::error("Failed to create timetable slot")),
            )
                .into_response();
        }
    }

    let active = timetable::ActiveModel {
        section_id: Set(req.section_id),
        subject_id: Set(req.subject_id),
        faculty_id: Set(req.faculty_id),
        day: Set(req.day),
        period: Set(req.period),
        ..Default::default()
    };

    match active.insert(app_state.db()).await {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SlotResponse::from(model),
                "Timetable slot created successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to create timetable slot: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to create timetable slot")),
            )
                .into_response()
        }
    }
}
