use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::Serialize;

use super::ProfileDeleteError;
use super::user::{self, Role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "faculty")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub employee_id: String,
    pub name: String,
    pub department_id: Option<i64>,
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
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::timetable::Entity")]
    TimetableSlots,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::timetable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Resolves the caller's login identity to their faculty profile.
    pub async fn get_by_user_id(
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    /// Creates a login identity and a faculty profile, rolling the identity
    /// back if the profile insert fails.
    pub async fn create_with_identity(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
        employee_id: &str,
        name: &str,
        department_id: Option<i64>,
    ) -> Result<Self, DbErr> {
        let identity = user::Model::create(db, email, password, Role::Faculty).await?;

        let inserted = ActiveModel {
            id: NotSet,
            user_id: Set(identity.id),
            employee_id: Set(employee_id.to_owned()),
            name: Set(name.to_owned()),
            department_id: Set(department_id),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await;

        match inserted {
            Ok(faculty) => Ok(faculty),
            Err(e) => {
                if let Err(cleanup) = user::Model::delete_by_id(db, identity.id).await {
                    tracing::error!(
                        user_id = identity.id,
                        error = %cleanup,
                        "Failed to roll back identity after faculty insert failure"
                    );
                }
                Err(e)
            }
        }
    }

    /// Deletes the profile row, then the login identity; the identity step is
    /// not compensated (see [`ProfileDeleteError::IdentityCleanup`]).
    pub async fn delete_with_identity(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<(), ProfileDeleteError> {
        let faculty = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ProfileDeleteError::NotFound)?;

        Entity::delete_by_id(id).exec(db).await?;

        user::Model::delete_by_id(db, faculty.user_id)
            .await
            .map_err(ProfileDeleteError::IdentityCleanup)
    }
}
