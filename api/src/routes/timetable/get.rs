use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::timetable;

use super::common::SlotResponse;

/// GET /api/timetable
pub async fn list(State(app_state): State<AppState>) -> impl IntoResponse {
    match timetable::Entity::find()
        .order_by_asc(timetable::Column::Day)
        .order_by_asc(timetable::Column::Period)
        .all(app_state.db())
        .await
    {
        Ok(models) => {
            let data: Vec<SlotResponse> = models.into_iter().map(SlotResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Timetable retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to list timetable: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch timetable")),
            )
                .into_response()
        }
    }
}

/// GET /api/timetable/section/{section_id}
pub async fn by_section(
    State(app_state): State<AppState>,
    Path(section_id): Path<i64>,
) -> impl IntoResponse {
    match timetable::Entity::find()
        .filter(timetable::Column::SectionId.eq(section_id))
        .order_by_asc(timetable::Column::Day)
        .order_by_asc(timetable::Column::Period)
        .all(app_state.db())
        .await
    {
        Ok(models) => {
            let data: Vec<SlotResponse> = models.into_iter().map(SlotResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Section timetable retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to fetch timetable for section {section_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch timetable")),
            )
                .into_response()
        }
    }
}
