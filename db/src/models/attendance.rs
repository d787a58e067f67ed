//! Per-lecture attendance rows.
//!
//! Saving attendance is a plain bulk insert: there is no uniqueness on
//! (student, subject, date), so re-saving the same date accumulates rows.
//! That duplicate-on-resave behavior is current product behavior and is kept
//! as-is rather than masked.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub date: Date,
    pub present: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id"
    )]
    Subject,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Bulk-inserts one row per (student, present) entry for a single
    /// (subject, date). The caller must reject an empty entry list first.
    pub async fn insert_bulk(
        db: &DatabaseConnection,
        subject_id: i64,
        date: Date,
        entries: &[(i64, bool)],
    ) -> Result<(), DbErr> {
        let rows = entries.iter().map(|(student_id, present)| ActiveModel {
            id: NotSet,
            student_id: Set(*student_id),
            subject_id: Set(subject_id),
            date: Set(date),
            present: Set(*present),
        });

        Entity::insert_many(rows).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{department, student, subject};
    use crate::test_utils::setup_test_db;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn resaving_the_same_date_accumulates_rows() {
        let db = setup_test_db().await;

        let dept = department::ActiveModel {
            id: NotSet,
            name: Set("Computer Science".into()),
            code: Set("CSE".into()),
            created_at: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        let subj = subject::ActiveModel {
            id: NotSet,
            department_id: Set(dept.id),
            semester: Set(3),
            name: Set("Operating Systems".into()),
            code: Set("CS301".into()),
            created_at: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        let s = student::Model::create_with_identity(
            &db,
            "att@college.test",
            "secret123",
            "22CS010",
            "Att",
            None,
            2022,
        )
        .await
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();

        Model::insert_bulk(&db, subj.id, date, &[(s.id, true)]).await.unwrap();
        Model::insert_bulk(&db, subj.id, date, &[(s.id, false)]).await.unwrap();

        // Current behavior: no de-duplication on (student, subject, date).
        let rows = Entity::find()
            .filter(Column::StudentId.eq(s.id))
            .filter(Column::SubjectId.eq(subj.id))
            .filter(Column::Date.eq(date))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(rows, 2);
    }
}
