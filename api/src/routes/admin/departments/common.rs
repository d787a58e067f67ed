use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::department;

#[derive(Debug, Deserialize, Validate)]
pub struct DepartmentRequest {
    #[validate(length(min = 1, message = "Name and code are required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Name and code are required"))]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<department::Model> for DepartmentResponse {
    fn from(m: department::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            code: m.code,
            created_at: m.created_at,
        }
    }
}
