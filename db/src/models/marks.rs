//! Marks records, one per (student, subject).
//!
//! Unlike attendance, marks writes are true upserts: a unique index on
//! (student_id, subject_id) backs an insert-on-conflict-update, so re-entering
//! marks overwrites instead of accumulating.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    /// Internal assessment 1, out of 20.
    pub internal1: i32,
    /// Internal assessment 2, out of 20.
    pub internal2: i32,
    /// External examination, out of 100.
    pub external: i32,
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
    /// Composite total out of [`crate::grade::MAX_TOTAL`].
    pub fn total(&self) -> i32 {
        self.internal1 + self.internal2 + self.external
    }

    /// Inserts or overwrites the marks row for (student, subject).
    pub async fn upsert(
        db: &DatabaseConnection,
        student_id: i64,
        subject_id: i64,
        internal1: i32,
        internal2: i32,
        external: i32,
    ) -> Result<(), DbErr> {
        let row = ActiveModel {
            id: NotSet,
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            internal1: Set(internal1),
            internal2: Set(internal2),
            external: Set(external),
        };

        Entity::insert(row)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::SubjectId])
                    .update_columns([Column::Internal1, Column::Internal2, Column::External])
                    .to_owned(),
            )
            .exec(db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{department, student, subject};
    use crate::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{DatabaseConnection, PaginatorTrait, QueryFilter};

    async fn seed_student_and_subject(db: &DatabaseConnection) -> (i64, i64) {
        let dept = department::ActiveModel {
            id: NotSet,
            name: Set("Computer Science".into()),
            code: Set("CSE".into()),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();

        let subj = subject::ActiveModel {
            id: NotSet,
            department_id: Set(dept.id),
            semester: Set(4),
            name: Set("Databases".into()),
            code: Set("CS402".into()),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();

        let s = student::Model::create_with_identity(
            db,
            "marks@college.test",
            "secret123",
            "22CS020",
            "Marks",
            None,
            2022,
        )
        .await
        .unwrap();

        (s.id, subj.id)
    }

    #[tokio::test]
    async fn entering_marks_twice_keeps_one_row_with_latest_values() {
        let db = setup_test_db().await;
        let (student_id, subject_id) = seed_student_and_subject(&db).await;

        Model::upsert(&db, student_id, subject_id, 15, 16, 70)
            .await
            .unwrap();
        Model::upsert(&db, student_id, subject_id, 18, 19, 85)
            .await
            .unwrap();

        let rows = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .all(&db)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].internal1, 18);
        assert_eq!(rows[0].internal2, 19);
        assert_eq!(rows[0].external, 85);
        assert_eq!(rows[0].total(), 122);
    }

    #[tokio::test]
    async fn different_subjects_keep_separate_rows() {
        let db = setup_test_db().await;
        let (student_id, subject_id) = seed_student_and_subject(&db).await;

        let other = subject::ActiveModel {
            id: NotSet,
            department_id: Set(1),
            semester: Set(4),
            name: Set("Networks".into()),
            code: Set("CS403".into()),
            created_at: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        Model::upsert(&db, student_id, subject_id, 10, 10, 50)
            .await
            .unwrap();
        Model::upsert(&db, student_id, other.id, 12, 12, 60)
            .await
            .unwrap();

        let count = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }
}
