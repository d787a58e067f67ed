use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{EntityTrait, QueryOrder};

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::department;

use super::common::DepartmentResponse;

/// GET /api/admin/departments
pub async fn list(State(app_state): State<AppState>) -> impl IntoResponse {
    match department::Entity::find()
        .order_by_asc(department::Column::Name)
        .all(app_state.db())
        .await
    {
        Ok(models) => {
            let data: Vec<DepartmentResponse> =
                models.into_iter().map(DepartmentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Departments retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to list departments: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch departments")),
            )
                .into_response()
        }
    }
}
