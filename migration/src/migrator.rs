use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608250001_create_users::Migration),
            Box::new(migrations::m202608250002_create_departments::Migration),
            Box::new(migrations::m202608250003_create_sections::Migration),
            Box::new(migrations::m202608250004_create_subjects::Migration),
            Box::new(migrations::m202608250005_create_students::Migration),
            Box::new(migrations::m202608250006_create_faculty::Migration),
            Box::new(migrations::m202608250007_create_timetable::Migration),
            Box::new(migrations::m202608250008_create_attendance::Migration),
            Box::new(migrations::m202608250009_create_marks::Migration),
        ]
    }
}
