use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{department, faculty};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFacultyRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Employee id is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub department_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFacultyRequest {
    #[validate(length(min = 1, message = "Employee id is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub department_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FacultyResponse {
    pub id: i64,
    pub user_id: i64,
    pub employee_id: String,
    pub name: String,
    pub department_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub department_name: Option<String>,
    /// Number of timetable slots assigned to this member. Deleting a
    /// faculty member with assignments cascades those slots away, so the
    /// admin UI warns when this is non-zero.
    pub timetable_count: i64,
    pub has_assignments: bool,
}

impl FacultyResponse {
    pub fn from_model(
        m: faculty::Model,
        dept: Option<department::Model>,
        timetable_count: i64,
    ) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            employee_id: m.employee_id,
            name: m.name,
            department_id: m.department_id,
            created_at: m.created_at,
            department_name: dept.map(|d| d.name),
            timetable_count,
            has_assignments: timetable_count > 0,
        }
    }
}

impl From<faculty::Model> for FacultyResponse {
    fn from(m: faculty::Model) -> Self {
        Self::from_model(m, None, 0)
    }
}
