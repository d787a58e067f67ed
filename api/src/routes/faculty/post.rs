use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use common::format_validation_errors;
use db::class_key::ClassKey;
use db::models::{attendance, marks};

use super::common::{require_section_assignment, resolve_faculty};

#[derive(Debug, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub present: bool,
}

#[derive(Debug, Deserialize)]
pub struct SaveAttendanceRequest {
    /// Class selector token, `"{section_id}|{subject_id}"`.
    pub class: Option<String>,
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub records: Vec<AttendanceEntry>,
}

/// POST /api/faculty/attendance
///
/// Bulk-saves attendance for one class and date. Each save appends rows;
/// re-submitting a date adds a second set rather than replacing the first.
pub async fn mark_attendance(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<SaveAttendanceRequest>,
) -> Response {
    let key = match ClassKey::parse(req.class.as_deref().unwrap_or("")) {
        Ok(key) => key,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(err.to_string())),
            )
                .into_response();
        }
    };

    if req.records.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error("Attendance records required")),
        )
            .into_response();
    }

    let faculty = match resolve_faculty(app_state.db(), auth.user_id()).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    if let Err(resp) = require_section_assignment(app_state.db(), faculty.id, key.section_id).await
    {
        return resp;
    }

    let entries: Vec<(i64, bool)> = req
        .records
        .iter()
        .map(|r| (r.student_id, r.present))
        .collect();

    match attendance::Model::insert_bulk(app_state.db(), key.subject_id, req.date, &entries).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<Empty>::success(
                Empty,
                "Attendance marked successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to save attendance for class {key}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to save attendance")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct MarkEntry {
    pub student_id: i64,
    #[validate(range(min = 0, max = 20, message = "Internal marks must be between 0 and 20"))]
    pub internal1: i32,
    #[validate(range(min = 0, max = 20, message = "Internal marks must be between 0 and 20"))]
    pub internal2: i32,
    #[validate(range(min = 0, max = 100, message = "External marks must be between 0 and 100"))]
    pub external: i32,
}

#[derive(Debug, Deserialize)]
pub struct SaveMarksRequest {
    /// Class selector token, `"{section_id}|{subject_id}"`.
    pub class: Option<String>,
    #[serde(default)]
    pub records: Vec<MarkEntry>,
}

/// POST /api/faculty/marks
///
/// Upserts one marks row per student for the class's subject; re-entering
/// marks overwrites the earlier row.
pub async fn enter_marks(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<SaveMarksRequest>,
) -> Response {
    let key = match ClassKey::parse(req.class.as_deref().unwrap_or("")) {
        Ok(key) => key,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(err.to_string())),
            )
                .into_response();
        }
    };

    if req.records.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error("Mark records required")),
        )
            .into_response();
    }

    for record in &req.records {
        if let Err(errors) = record.validate() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error(format_validation_errors(
                    &errors,
                ))),
            )
                .into_response();
        }
    }

    let faculty = match resolve_faculty(app_state.db(), auth.user_id()).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    if let Err(resp) = require_section_assignment(app_state.db(), faculty.id, key.section_id).await
    {
        return resp;
    }

    for record in &req.records {
        if let Err(err) = marks::Model::upsert(
            app_state.db(),
            record.student_id,
            key.subject_id,
            record.internal1,
            record.internal2,
            record.external,
        )
        .await
        {
            tracing::error!("failed to save marks for class {key}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to save marks")),
            )
                .into_response();
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::<Empty>::success(
            Empty,
            "Marks entered successfully",
        )),
    )
        .into_response()
}
