use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{department, subject};

#[derive(Debug, Deserialize, Validate)]
pub struct SubjectRequest {
    pub department_id: i64,
    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,
    #[validate(length(min = 1, message = "Subject name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Subject code is required"))]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: i64,
    pub department_id: i64,
    pub semester: i32,
    pub name: String,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub department_name: Option<String>,
}

impl SubjectResponse {
    pub fn from_model(m: subject::Model, dept: Option<department::Model>) -> Self {
        Self {
            id: m.id,
            department_id: m.department_id,
            semester: m.semester,
            name: m.name,
            code: m.code,
            created_at: m.created_at,
            department_name: dept.map(|d| d.name),
        }
    }
}

impl From<subject::Model> for SubjectResponse {
    fn from(m: subject::Model) -> Self {
        Self::from_model(m, None)
    }
}
