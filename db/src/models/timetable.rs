//! Timetable slot assignments.
//!
//! A slot is (section, subject, faculty, day, period). At most one slot may
//! exist per (section, day, period); that invariant is enforced by
//! [`Model::has_conflict`] at write time, not by a database constraint, so two
//! concurrent creates can still race past the check. The deployment
//! assumption is a single admin operator.

use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QuerySelect};
use serde::{Deserialize, Serialize};

/// Teaching days. Sunday is not schedulable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DayOfWeek {
    #[sea_orm(string_value = "Monday")]
    Monday,
    #[sea_orm(string_value = "Tuesday")]
    Tuesday,
    #[sea_orm(string_value = "Wednesday")]
    Wednesday,
    #[sea_orm(string_value = "Thursday")]
    Thursday,
    #[sea_orm(string_value = "Friday")]
    Friday,
    #[sea_orm(string_value = "Saturday")]
    Saturday,
}

/// Assignment rows fetched when checking whether a faculty member teaches a
/// section; an existence probe, so the fetch is capped.
const MAX_ASSIGNMENTS_TO_CHECK: u64 = 10;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "timetable")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub section_id: i64,
    pub subject_id: i64,
    pub faculty_id: i64,
    pub day: DayOfWeek,
    /// Period number within the day, 1-8.
    pub period: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::faculty::Entity",
        from = "Column::FacultyId",
        to = "super::faculty::Column::Id"
    )]
    Faculty,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::faculty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Returns true if the section already has a slot at (day, period),
    /// excluding `exclude_id` so an update does not conflict with itself.
    pub async fn has_conflict(
        db: &DatabaseConnection,
        section_id: i64,
        day: DayOfWeek,
        period: i32,
        exclude_id: Option<i64>,
    ) -> Result<bool, DbErr> {
        let mut query = Entity::find()
            .filter(Column::SectionId.eq(section_id))
            .filter(Column::Day.eq(day))
            .filter(Column::Period.eq(period));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.count(db).await? > 0)
    }

    /// Existence check: does this faculty member have any slot against the
    /// section? Gates roster, attendance and marks access for faculty.
    pub async fn faculty_assigned_to_section(
        db: &DatabaseConnection,
        faculty_id: i64,
        section_id: i64,
    ) -> Result<bool, DbErr> {
        let assignments = Entity::find()
            .filter(Column::FacultyId.eq(faculty_id))
            .filter(Column::SectionId.eq(section_id))
            .limit(MAX_ASSIGNMENTS_TO_CHECK)
            .all(db)
            .await?;

        Ok(!assignments.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{department, faculty, section, subject};
    use crate::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};

    async fn seed_slot_parents(db: &DatabaseConnection) -> (i64, i64, i64) {
        let dept = department::ActiveModel {
            id: NotSet,
            name: Set("Computer Science".into()),
            code: Set("CSE".into()),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();

        let section = section::ActiveModel {
            id: NotSet,
            department_id: Set(dept.id),
            year: Set(2),
            name: Set("CSE-A".into()),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();

        let subject = subject::ActiveModel {
            id: NotSet,
            department_id: Set(dept.id),
            semester: Set(3),
            name: Set("Data Structures".into()),
            code: Set("CS201".into()),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();

        let faculty = faculty::Model::create_with_identity(
            db,
            "teach@college.test",
            "secret123",
            "EMP001",
            "Prof. Teach",
            Some(dept.id),
        )
        .await
        .unwrap();

        (section.id, subject.id, faculty.id)
    }

    async fn insert_slot(
        db: &DatabaseConnection,
        section_id: i64,
        subject_id: i64,
        faculty_id: i64,
        day: DayOfWeek,
        period: i32,
    ) -> Model {
        ActiveModel {
            id: NotSet,
            section_id: Set(section_id),
            subject_id: Set(subject_id),
            faculty_id: Set(faculty_id),
            day: Set(day),
            period: Set(period),
        }
        .insert(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn conflict_on_same_section_day_period() {
        let db = setup_test_db().await;
        let (section_id, subject_id, faculty_id) = seed_slot_parents(&db).await;

        insert_slot(&db, section_id, subject_id, faculty_id, DayOfWeek::Monday, 1).await;

        assert!(
            Model::has_conflict(&db, section_id, DayOfWeek::Monday, 1, None)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn no_conflict_when_any_coordinate_differs() {
        let db = setup_test_db().await;
        let (section_id, subject_id, faculty_id) = seed_slot_parents(&db).await;

        insert_slot(&db, section_id, subject_id, faculty_id, DayOfWeek::Monday, 1).await;

        // Different period.
        assert!(
            !Model::has_conflict(&db, section_id, DayOfWeek::Monday, 2, None)
                .await
                .unwrap()
        );
        // Different day.
        assert!(
            !Model::has_conflict(&db, section_id, DayOfWeek::Tuesday, 1, None)
                .await
                .unwrap()
        );
        // Different section.
        assert!(
            !Model::has_conflict(&db, section_id + 1, DayOfWeek::Monday, 1, None)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn excluded_slot_does_not_conflict_with_itself() {
        let db = setup_test_db().await;
        let (section_id, subject_id, faculty_id) = seed_slot_parents(&db).await;

        let slot =
            insert_slot(&db, section_id, subject_id, faculty_id, DayOfWeek::Friday, 4).await;

        assert!(
            !Model::has_conflict(&db, section_id, DayOfWeek::Friday, 4, Some(slot.id))
                .await
                .unwrap()
        );
        // A second slot at the same triple still conflicts even when another
        // id is excluded.
        let other =
            insert_slot(&db, section_id, subject_id, faculty_id, DayOfWeek::Friday, 5).await;
        assert!(
            Model::has_conflict(&db, section_id, DayOfWeek::Friday, 4, Some(other.id))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn faculty_assignment_check_is_an_existence_probe() {
        let db = setup_test_db().await;
        let (section_id, subject_id, faculty_id) = seed_slot_parents(&db).await;

        assert!(
            !Model::faculty_assigned_to_section(&db, faculty_id, section_id)
                .await
                .unwrap()
        );

        insert_slot(&db, section_id, subject_id, faculty_id, DayOfWeek::Wednesday, 3).await;

        assert!(
            Model::faculty_assigned_to_section(&db, faculty_id, section_id)
                .await
                .unwrap()
        );
        // A different faculty id stays unauthorized.
        assert!(
            !Model::faculty_assigned_to_section(&db, faculty_id + 1, section_id)
                .await
                .unwrap()
        );
    }
}
