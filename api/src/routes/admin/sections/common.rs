use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{department, section};

#[derive(Debug, Deserialize, Validate)]
pub struct SectionRequest {
    pub department_id: i64,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: i32,
    #[validate(length(min = 1, message = "Section name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub id: i64,
    pub department_id: i64,
    pub year: i32,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub department_name: Option<String>,
    pub department_code: Option<String>,
}

impl SectionResponse {
    pub fn from_model(m: section::Model, dept: Option<department::Model>) -> Self {
        Self {
            id: m.id,
            department_id: m.department_id,
            year: m.year,
            name: m.name,
            created_at: m.created_at,
            department_name: dept.as_ref().map(|d| d.name.clone()),
            department_code: dept.map(|d| d.code),
        }
    }
}

impl From<section::Model> for SectionResponse {
    fn from(m: section::Model) -> Self {
        Self::from_model(m, None)
    }
}
