//! HTTP-level tests driven through `tower::ServiceExt::oneshot` against an
//! in-memory database. Tests that touch process environment are serialized
//! with `serial_test`.

mod admin_test;
mod student_test;
mod timetable_test;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;

use crate::auth::claims::Claims;
use crate::routes::routes;
use crate::state::AppState;
use db::models::user::Role;
use db::models::{department, faculty, section, student, subject, user};

fn ensure_test_env() {
    // Safety: every test sets the same values and runs under #[serial].
    unsafe {
        std::env::set_var("DATABASE_PATH", "sqlite::memory:");
        std::env::set_var("JWT_SECRET", "test-secret");
    }
}

pub(crate) async fn setup_app() -> (Router, DatabaseConnection) {
    ensure_test_env();
    let db = db::test_utils::setup_test_db().await;
    let app = Router::new().nest("/api", routes(AppState::new(db.clone())));
    (app, db)
}

pub(crate) fn token_for(user_id: i64, role: Role) -> String {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        role,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::config::jwt_secret().as_bytes()),
    )
    .unwrap()
}

pub(crate) async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// A fully wired campus: one department, section, subject, faculty member
/// with a login, one enrolled student with a login, and an admin identity.
pub(crate) struct Seed {
    pub app: Router,
    pub db: DatabaseConnection,
    pub admin_token: String,
    pub dept_id: i64,
    pub section_id: i64,
    pub subject_id: i64,
    pub faculty: faculty::Model,
    pub student: student::Model,
}

pub(crate) async fn seed_campus() -> Seed {
    let (app, db) = setup_app().await;

    let admin = user::Model::create(&db, "admin@college.test", "secret123", Role::Admin)
        .await
        .unwrap();
    let admin_token = token_for(admin.id, Role::Admin);

    let dept = department::ActiveModel {
        id: NotSet,
        name: Set("Computer Science".into()),
        code: Set("CSE".into()),
        created_at: Set(Utc::now()),
    }
    .insert(&db)
    .await
    .unwrap();

    let sect = section::ActiveModel {
        id: NotSet,
        department_id: Set(dept.id),
        year: Set(2),
        name: Set("CSE-A".into()),
        created_at: Set(Utc::now()),
    }
    .insert(&db)
    .await
    .unwrap();

    let subj = subject::ActiveModel {
        id: NotSet,
        department_id: Set(dept.id),
        semester: Set(3),
        name: Set("Data Structures".into()),
        code: Set("CS201".into()),
        created_at: Set(Utc::now()),
    }
    .insert(&db)
    .await
    .unwrap();

    let faculty = faculty::Model::create_with_identity(
        &db,
        "prof@college.test",
        "secret123",
        "EMP100",
        "Prof. Rao",
        Some(dept.id),
    )
    .await
    .unwrap();

    let student = student::Model::create_with_identity(
        &db,
        "asha@college.test",
        "secret123",
        "22CS010",
        "Asha",
        Some(sect.id),
        2022,
    )
    .await
    .unwrap();

    Seed {
        app,
        db,
        admin_token,
        dept_id: dept.id,
        section_id: sect.id,
        subject_id: subj.id,
        faculty,
        student,
    }
}
