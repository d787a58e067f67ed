use axum::{Json, extract::State, http::StatusCode, response::{IntoResponse, Response}};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde::Serialize;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::state::AppState;
use db::models::{department, faculty, section, student, subject};

#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub total_students: u64,
    pub total_faculty: u64,
    pub total_departments: u64,
    pub total_subjects: u64,
}

/// GET /api/stats/admin
pub async fn admin_overview(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    let counts = async {
        Ok::<_, sea_orm::DbErr>(AdminOverview {
            total_students: student::Entity::find().count(db).await?,
            total_faculty: faculty::Entity::find().count(db).await?,
            total_departments: department::Entity::find().count(db).await?,
            total_subjects: subject::Entity::find().count(db).await?,
        })
    }
    .await;

    match counts {
        Ok(overview) => (
            StatusCode::OK,
            Json(ApiResponse::success(overview, "Statistics retrieved")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to compute admin statistics: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch statistics")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DepartmentBreakdown {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub sections_count: u64,
    pub students_count: u64,
    pub faculty_count: u64,
}

/// GET /api/stats/departments
///
/// Per-department section, student and faculty counts. Students are tied
/// to a department through their section.
pub async fn department_breakdown(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    let departments = match department::Entity::find().all(db).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!("failed to list departments: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to fetch statistics")),
            )
                .into_response();
        }
    };

    let mut data = Vec::with_capacity(departments.len());
    for dept in departments {
        let breakdown = async {
            let sections = section::Entity::find()
                .filter(section::Column::DepartmentId.eq(dept.id))
                .all(db)
                .await?;
            let section_ids: Vec<i64> = sections.iter().map(|s| s.id).collect();

            let students_count = if section_ids.is_empty() {
                0
            } else {
                student::Entity::find()
                    .filter(student::Column::SectionId.is_in(section_ids))
                    .count(db)
                    .await?
            };

            let faculty_count = faculty::Entity::find()
                .filter(faculty::Column::DepartmentId.eq(dept.id))
                .count(db)
                .await?;

            Ok::<_, sea_orm::DbErr>(DepartmentBreakdown {
                id: dept.id,
                name: dept.name.clone(),
                code: dept.code.clone(),
                sections_count: sections.len() as u64,
                students_count,
                faculty_count,
            })
        }
        .await;

        match breakdown {
            Ok(entry) => data.push(entry),
            Err(err) => {
                tracing::error!("failed to compute statistics for department {}: {err}", dept.id);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error("Failed to fetch statistics")),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Statistics retrieved")),
    )
        .into_response()
}
