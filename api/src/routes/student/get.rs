use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::auth::claims::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::grade::letter_grade;
use db::models::{attendance, department, faculty, marks, section, subject, timetable};

use super::common::resolve_student;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub roll_no: String,
    pub name: String,
    pub admission_year: i32,
    pub section_id: Option<i64>,
    pub section_name: Option<String>,
    pub section_year: Option<i32>,
    pub department_name: Option<String>,
    pub department_code: Option<String>,
}

/// GET /api/student/profile
pub async fn profile(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Response {
    let student = match resolve_student(app_state.db(), auth.user_id()).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let mut response = ProfileResponse {
        id: student.id,
        roll_no: student.roll_no,
        name: student.name,
        admission_year: student.admission_year,
        section_id: student.section_id,
        section_name: None,
        section_year: None,
        department_name: None,
        department_code: None,
    };

    if let Some(section_id) = student.section_id {
        match section::Entity::find_by_id(section_id)
            .find_also_related(department::Entity)
            .one(app_state.db())
            .await
        {
            Ok(Some((sect, dept))) => {
                response.section_name = Some(sect.name);
                response.section_year = Some(sect.year);
                response.department_name = dept.as_ref().map(|d| d.name.clone());
                response.department_code = dept.map(|d| d.code);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!("failed to load section {section_id}: {err}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error("Failed to load profile")),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(response, "Profile retrieved")),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: chrono::NaiveDate,
    pub present: bool,
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubjectAttendanceSummary {
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
    pub total: u32,
    pub present: u32,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct AttendanceView {
    pub records: Vec<AttendanceRecord>,
    pub summary: Vec<SubjectAttendanceSummary>,
}

/// GET /api/student/attendance
///
/// Raw attendance rows, newest first, plus a per-subject percentage
/// summary. Duplicate rows from re-saved dates count individually.
pub async fn attendance_view(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Response {
    let student = match resolve_student(app_state.db(), auth.user_id()).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let rows = match attendance::Entity::find()
        .filter(attendance::Column::StudentId.eq(student.id))
        .find_also_related(subject::Entity)
        .order_by_desc(attendance::Column::Date)
        .all(app_state.db())
        .await
    {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!("failed to load attendance for student {}: {err}", student.id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch attendance")),
            )
                .into_response();
        }
    };

    let mut tallies: HashMap<i64, (Option<String>, Option<String>, u32, u32)> = HashMap::new();
    let mut records = Vec::with_capacity(rows.len());
    for (row, subj) in rows {
        let entry = tallies.entry(row.subject_id).or_insert_with(|| {
            (
                subj.as_ref().map(|s| s.name.clone()),
                subj.as_ref().map(|s| s.code.clone()),
                0,
                0,
            )
        });
        entry.2 += 1;
        if row.present {
            entry.3 += 1;
        }

        records.push(AttendanceRecord {
            id: row.id,
            date: row.date,
            present: row.present,
            subject_id: row.subject_id,
            subject_name: subj.as_ref().map(|s| s.name.clone()),
            subject_code: subj.map(|s| s.code),
        });
    }

    let mut summary: Vec<SubjectAttendanceSummary> = tallies
        .into_iter()
        .map(
            |(subject_id, (subject_name, subject_code, total, present))| {
                SubjectAttendanceSummary {
                    subject_id,
                    subject_name,
                    subject_code,
                    total,
                    present,
                    percentage: if total == 0 {
                        0.0
                    } else {
                        f64::from(present) * 100.0 / f64::from(total)
                    },
                }
            },
        )
        .collect();
    summary.sort_by_key(|s| s.subject_id);

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            AttendanceView { records, summary },
            "Attendance retrieved",
        )),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct MarksRecord {
    pub id: i64,
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
    pub internal1: i32,
    pub internal2: i32,
    pub external: i32,
    pub total: i32,
    pub grade: &'static str,
}

/// GET /api/student/marks
///
/// One row per subject with the composite total and letter grade.
pub async fn marks_view(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Response {
    let student = match resolve_student(app_state.db(), auth.user_id()).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match marks::Entity::find()
        .filter(marks::Column::StudentId.eq(student.id))
        .find_also_related(subject::Entity)
        .all(app_state.db())
        .await
    {
        Ok(rows) => {
            let data: Vec<MarksRecord> = rows
                .into_iter()
                .map(|(m, subj)| {
                    let total = m.total();
                    MarksRecord {
                        id: m.id,
                        subject_id: m.subject_id,
                        subject_name: subj.as_ref().map(|s| s.name.clone()),
                        subject_code: subj.map(|s| s.code),
                        internal1: m.internal1,
                        internal2: m.internal2,
                        external: m.external,
                        total,
                        grade: letter_grade(total),
                    }
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Marks retrieved")),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to load marks for student {}: {err}", student.id);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch marks")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimetableRow {
    pub id: i64,
    pub day: timetable::DayOfWeek,
    pub period: i32,
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub subject_code: Option<String>,
    pub faculty_name: Option<String>,
}

/// GET /api/student/timetable
///
/// Weekly schedule for the caller's section. A student without a section
/// assignment has no timetable.
pub async fn timetable_view(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Response {
    let student = match resolve_student(app_state.db(), auth.user_id()).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let Some(section_id) = student.section_id else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Student section not found")),
        )
            .into_response();
    };

    let slots = match timetable::Entity::find()
        .filter(timetable::Column::SectionId.eq(section_id))
        .order_by_asc(timetable::Column::Day)
        .order_by_asc(timetable::Column::Period)
        .all(app_state.db())
        .await
    {
        Ok(slots) => slots,
        Err(err) => {
            tracing::error!("failed to load timetable for section {section_id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch timetable")),
            )
                .into_response();
        }
    };

    let subject_ids: Vec<i64> = slots.iter().map(|s| s.subject_id).collect();
    let faculty_ids: Vec<i64> = slots.iter().map(|s| s.faculty_id).collect();

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
                Json(ApiResponse::<Empty>::error("Failed to fetch timetable")),
            )
                .into_response();
        }
    };

    let faculty_names: HashMap<i64, String> = match faculty::Entity::find()
        .filter(faculty::Column::Id.is_in(faculty_ids))
        .all(app_state.db())
        .await
    {
        Ok(rows) => rows.into_iter().map(|f| (f.id, f.name)).collect(),
        Err(err) => {
            tracing::error!("failed to load faculty: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch timetable")),
            )
                .into_response();
        }
    };

    let data: Vec<TimetableRow> = slots
        .into_iter()
        .map(|slot| {
            let subj = subjects.get(&slot.subject_id);
            TimetableRow {
                id: slot.id,
                day: slot.day,
                period: slot.period,
                subject_id: slot.subject_id,
                subject_name: subj.map(|s| s.name.clone()),
                subject_code: subj.map(|s| s.code.clone()),
                faculty_name: faculty_names.get(&slot.faculty_id).cloned(),
            }
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Timetable retrieved")),
    )
        .into_response()
}
