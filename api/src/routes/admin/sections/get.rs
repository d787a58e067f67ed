use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{EntityTrait, QueryOrder};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::section;

use super::common::SectionResponse;

/// GET /api/admin/sections
///
/// Sections with their owning department, ordered by year then name.
pub async fn list(State(app_state): State<AppState>) -> impl IntoResponse {
    match section::Entity::find()
        .find_also_related(db::models::department::Entity)
        .order_by_asc(section::Column::Year)
        .order_by_asc(section::Column::Name)
        .all(app_state.db())
        .await
    {
        Ok(rows) => {
            let data: Vec<SectionResponse> = rows
                .into_iter()
                .map(|(s, d)| SectionResponse::from_model(s, d))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Sections retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to list sections: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch sections")),
            )
                .into_response()
        }
    }
}
