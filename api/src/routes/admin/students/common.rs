use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{section, student};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Roll number is required"))]
    pub roll_no: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub section_id: Option<i64>,
    pub admission_year: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, message = "Roll number is required"))]
    pub roll_no: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub section_id: Option<i64>,
    pub admission_year: i32,
}

#[derive(Debug, Deserialize)]
pub struct StudentListQuery {
    pub section_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub user_id: i64,
    pub roll_no: String,
    pub name: String,
    pub section_id: Option<i64>,
    pub admission_year: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub section_name: Option<String>,
}

impl StudentResponse {
    pub fn from_model(m: student::Model, sect: Option<section::Model>) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            roll_no: m.roll_no,
            name: m.name,
            section_id: m.section_id,
            admission_year: m.admission_year,
            created_at: m.created_at,
            section_name: sect.map(|s| s.name),
        }
    }
}

impl From<student::Model> for StudentResponse {
    fn from(m: student::Model) -> Self {
        Self::from_model(m, None)
    }
}
