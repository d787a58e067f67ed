use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::timetable::{self, DayOfWeek};

pub const CONFLICT_MESSAGE: &str =
    "Timetable conflict: This section already has a class scheduled for this day and period";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSlotRequest {
    pub section_id: i64,
    pub subject_id: i64,
    pub faculty_id: i64,
    pub day: DayOfWeek,
    #[validate(range(min = 1, max = 8, message = "Period must be between 1 and 8"))]
    pub period: i32,
}

/// Partial update; only the provided fields change. The conflict check runs
/// only when section, day and period are all present in the payload.
#[derive(Debug, Deserialize)]
pub struct UpdateSlotRequest {
    pub section_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub faculty_id: Option<i64>,
    pub day: Option<DayOfWeek>,
    pub period: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub id: i64,
    pub section_id: i64,
    pub subject_id: i64,
    pub faculty_id: i64,
    pub day: DayOfWeek,
    pub period: i32,
}

impl From<timetable::Model> for SlotResponse {
    fn from(m: timetable::Model) -> Self {
        Self {
            id: m.id,
            section_id: m.section_id,
            subject_id: m.subject_id,
            faculty_id: m.faculty_id,
            day: m.day,
            period: m.period,
        }
    }
}
