use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::Serialize;

use super::ProfileDeleteError;
use super::user::{self, Role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    #[sea_orm(unique)]
    pub roll_no: String,
    pub name: String,
    /// Nullable: a student can be created before being placed in a section.
    pub section_id: Option<i64>,
    pub admission_year: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id"
    )]
    Section,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::marks::Entity")]
    Marks,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Resolves the caller's login identity to their student profile.
    pub async fn get_by_user_id(
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    /// Creates a login identity and a student profile as one transaction
    /// script: if the profile insert fails the identity is deleted again
    /// before the error is propagated.
    pub async fn create_with_identity(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
        roll_no: &str,
        name: &str,
        section_id: Option<i64>,
        admission_year: i32,
    ) -> Result<Self, DbErr> {
        let identity = user::Model::create(db, email, password, Role::Student).await?;

        let inserted = ActiveModel {
            id: NotSet,
            user_id: Set(identity.id),
            roll_no: Set(roll_no.to_owned()),
            name: Set(name.to_owned()),
            section_id: Set(section_id),
            admission_year: Set(admission_year),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await;

        match inserted {
            Ok(student) => Ok(student),
            Err(e) => {
                if let Err(cleanup) = user::Model::delete_by_id(db, identity.id).await {
                    tracing::error!(
                        user_id = identity.id,
                        error = %cleanup,
                        "Failed to roll back identity after student insert failure"
                    );
                }
                Err(e)
            }
        }
    }

    /// Deletes the profile row, then the login identity. The identity step is
    /// not compensated: if it fails the profile stays deleted and the orphaned
    /// identity is reported via [`ProfileDeleteError::IdentityCleanup`].
    pub async fn delete_with_identity(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<(), ProfileDeleteError> {
        let student = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ProfileDeleteError::NotFound)?;

        Entity::delete_by_id(id).exec(db).await?;

        user::Model::delete_by_id(db, student.user_id)
            .await
            .map_err(ProfileDeleteError::IdentityCleanup)
    }
}
