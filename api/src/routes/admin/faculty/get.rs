use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{EntityTrait, QueryOrder};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::{faculty, timetable};

use super::common::FacultyResponse;

/// GET /api/admin/faculty
///
/// Faculty members with their department and timetable assignment counts,
/// ordered by employee id.
pub async fn list(State(app_state): State<AppState>) -> impl IntoResponse {
    let rows = match faculty::Entity::find()
        .find_also_related(db::models::department::Entity)
        .order_by_asc(faculty::Column::EmployeeId)
        .all(app_state.db())
        .await
    {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!("failed to list faculty: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch faculty")),
            )
                .into_response();
        }
    };

    let slots = match timetable::Entity::find().all(app_state.db()).await {
        Ok(slots) => slots,
        Err(err) => {
            tracing::error!("failed to count timetable assignments: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch faculty")),
            )
                .into_response();
        }
    };

    let mut counts: HashMap<i64, i64> = HashMap::new();
    for slot in slots {
        *counts.entry(slot.faculty_id).or_insert(0) += 1;
    }

    let data: Vec<FacultyResponse> = rows
        .into_iter()
        .map(|(f, d)| {
            let count = counts.get(&f.id).copied().unwrap_or(0);
            FacultyResponse::from_model(f, d, count)
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Faculty retrieved")),
    )
        .into_response()
}
