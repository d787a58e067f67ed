use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::class_key::ClassKey;
use db::models::{attendance, marks, section, student, subject, timetable};

use super::common::{StudentBrief, require_section_assignment, resolve_faculty};

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub id: i64,
    pub day: timetable::DayOfWeek,
    pub period: i32,
    pub section_id: i64,
    pub section_name: Option<String>,
    pub section_year: Option<i32>,
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
    /// Opaque selector for this (section, subject) pair; sent back verbatim
    /// in attendance and marks submissions.
    pub class_key: String,
}

/// GET /api/faculty/classes
///
/// Every timetable slot assigned to the caller, with section and subject
/// details and the class selector token.
pub async fn classes(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Response {
    let faculty = match resolve_faculty(app_state.db(), auth.user_id()).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    let slots = match timetable::Entity::find()
        .filter(timetable::Column::FacultyId.eq(faculty.id))
        .order_by_asc(timetable::Column::Day)
        .order_by_asc(timetable::Column::Period)
        .all(app_state.db())
        .await
    {
        Ok(slots) => slots,
        Err(err) => {
            tracing::error!("failed to load classes for faculty {}: {err}", faculty.id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch classes")),
            )
                .into_response();
        }
    };

    let section_ids: Vec<i64> = slots.iter().map(|s| s.section_id).collect();
    let subject_ids: Vec<i64> = slots.iter().map(|s| s.subject_id).collect();

    let sections: HashMap<i64, section::Model> = match section::Entity::find()
        .filter(section::Column::Id.is_in(section_ids))
        .all(app_state.db())
        .await
    {
        Ok(rows) => rows.into_iter().map(|s| (s.id, s)).collect(),
        Err(err) => {
            tracing::error!("failed to load sections: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch classes")),
            )
                .into_response();
        }
    };

    let subjects: HashMap<i64, subject::Model> = match subject::Entity::find()
        .filter(subject::Column::Id.is_in(subject_ids))
        .all(app_state.db())
        .await
    {
        Ok(rows) => rows.into_iter().map(|s| (s.id, s)).collect(),
        Err(err) => {
            tracing::error!("failed to load subjects: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch classes")),
            )
                .into_response();
        }
    };

    let data: Vec<ClassResponse> = slots
        .into_iter()
        .map(|slot| {
            let sect = sections.get(&slot.section_id);
            let subj = subjects.get(&slot.subject_id);
            ClassResponse {
                id: slot.id,
                day: slot.day,
                period: slot.period,
                section_id: slot.section_id,
                section_name: sect.map(|s| s.name.clone()),
                section_year: sect.map(|s| s.year),
                subject_id: slot.subject_id,
                subject_name: subj.map(|s| s.name.clone()),
                subject_code: subj.map(|s| s.code.clone()),
                class_key: ClassKey {
                    section_id: slot.section_id,
                    subject_id: slot.subject_id,
                }
                .encode(),
            }
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Classes retrieved")),
    )
        .into_response()
}

/// GET /api/faculty/students/{section_id}
///
/// Roster of a section the caller is assigned to teach.
pub async fn students_by_section(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(section_id): Path<i64>,
) -> Response {
    let faculty = match resolve_faculty(app_state.db(), auth.user_id()).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    if let Err(resp) = require_section_assignment(app_state.db(), faculty.id, section_id).await {
        return resp;
    }

    match student::Entity::find()
        .filter(student::Column::SectionId.eq(section_id))
        .order_by_asc(student::Column::RollNo)
        .all(app_state.db())
        .await
    {
        Ok(rows) => {
            let data: Vec<StudentBrief> = rows.into_iter().map(StudentBrief::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Students retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to load roster for section {section_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch students")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AttendanceRow {
    pub id: i64,
    pub date: chrono::NaiveDate,
    pub present: bool,
    pub student: Option<StudentBrief>,
}

/// GET /api/faculty/attendance/{subject_id}
///
/// Attendance history for a subject, newest first. Re-saved dates appear
/// as additional rows.
pub async fn attendance_by_subject(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(subject_id): Path<i64>,
) -> Response {
    if let Err(resp) = resolve_faculty(app_state.db(), auth.user_id()).await {
        return resp;
    }

    match attendance::Entity::find()
        .filter(attendance::Column::SubjectId.eq(subject_id))
        .find_also_related(student::Entity)
        .order_by_desc(attendance::Column::Date)
        .all(app_state.db())
        .await
    {
        Ok(rows) => {
            let data: Vec<AttendanceRow> = rows
                .into_iter()
                .map(|(a, s)| AttendanceRow {
                    id: a.id,
                    date: a.date,
                    present: a.present,
                    student: s.map(StudentBrief::from),
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Attendance retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to load attendance for subject {subject_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch attendance")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarksRow {
    pub id: i64,
    pub internal1: i32,
    pub internal2: i32,
    pub external: i32,
    pub total: i32,
    pub student: Option<StudentBrief>,
}

/// GET /api/faculty/marks/{subject_id}
pub async fn marks_by_subject(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(subject_id): Path<i64>,
) -> Response {
    if let Err(resp) = resolve_faculty(app_state.db(), auth.user_id()).await {
        return resp;
    }

    match marks::Entity::find()
        .filter(marks::Column::SubjectId.eq(subject_id))
        .find_also_related(student::Entity)
        .all(app_state.db())
        .await
    {
        Ok(rows) => {
            let data: Vec<MarksRow> = rows
                .into_iter()
                .map(|(m, s)| MarksRow {
                    id: m.id,
                    internal1: m.internal1,
                    internal2: m.internal2,
                    external: m.external,
                    total: m.total(),
                    student: s.map(StudentBrief::from),
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Marks retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to load marks for subject {subject_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch marks")),
            )
                .into_response()
        }
    }
}
