use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use db::models::{faculty, timetable};

pub const NOT_ASSIGNED_MESSAGE: &str = "You are not assigned to teach this section. \
     Please contact your administrator to assign you to this class.";

/// Resolves the caller's login identity to their faculty profile, or
/// produces the error response to return as-is.
pub async fn resolve_faculty(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<faculty::Model, Response> {
    match faculty::Model::get_by_user_id(db, user_id).await {
        Ok(Some(profile)) => Ok(profile),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Faculty profile not found")),
        )
            .into_response()),
        Err(err) => {
            tracing::error!("failed to resolve faculty profile for user {user_id}: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to load faculty profile")),
            )
                .into_response())
        }
    }
}

/// Rejects the request unless the faculty member has at least one timetable
/// slot against the section.
pub async fn require_section_assignment(
    db: &DatabaseConnection,
    faculty_id: i64,
    section_id: i64,
) -> Result<(), Response> {
    match timetable::Model::faculty_assigned_to_section(db, faculty_id, section_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error(NOT_ASSIGNED_MESSAGE)),
        )
            .into_response()),
        Err(err) => {
            tracing::error!(
                "failed assignment check for faculty {faculty_id} on section {section_id}: {err}"
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to verify assignment")),
            )
                .into_response())
        }
    }
}

/// Minimal student identity carried in attendance and marks listings.
#[derive(Debug, Serialize)]
pub struct StudentBrief {
    pub id: i64,
    pub roll_no: String,
    pub name: String,
}

impl From<db::models::student::Model> for StudentBrief {
    fn from(m: db::models::student::Model) -> Self {
        Self {
            id: m.id,
            roll_no: m.roll_no,
            name: m.name,
        }
    }
}
