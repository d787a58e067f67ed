use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::student;

use super::common::{StudentListQuery, StudentResponse};

/// GET /api/admin/students?section_id=...
///
/// All students, or the roster of one section when `section_id` is given.
pub async fn list(
    State(app_state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> impl IntoResponse {
    let mut select = student::Entity::find()
        .find_also_related(db::models::section::Entity)
        .order_by_asc(student::Column::RollNo);

    if let Some(section_id) = query.section_id {
        select = select.filter(student::Column::SectionId.eq(section_id));
    }

    match select.all(app_state.db()).await {
        Ok(rows) => {
            let data: Vec<StudentResponse> = rows
                .into_iter()
                .map(|(s, sect)| StudentResponse::from_model(s, sect))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Students retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to list students: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch students")),
            )
                .into_response()
        }
    }
}
