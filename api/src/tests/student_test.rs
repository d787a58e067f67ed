use axum::http::StatusCode;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde_json::json;
use serial_test::serial;

use db::models::user::Role;
use db::models::{attendance, marks, student, timetable, user};

use super::{request, seed_campus, token_for};

#[tokio::test]
#[serial]
async fn missing_student_profile_is_not_found() {
    let seed = seed_campus().await;

    let orphan = user::Model::create(&seed.db, "lost@college.test", "secret123", Role::Student)
        .await
        .unwrap();
    let token = token_for(orphan.id, Role::Student);

    let (status, json) = request(&seed.app, "GET", "/api/student/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Student profile not found");
}

#[tokio::test]
#[serial]
async fn profile_includes_section_and_department() {
    let seed = seed_campus().await;
    let token = token_for(seed.student.user_id, Role::Student);

    let (status, json) = request(&seed.app, "GET", "/api/student/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["roll_no"], "22CS010");
    assert_eq!(json["data"]["section_name"], "CSE-A");
    assert_eq!(json["data"]["department_code"], "CSE");
}

#[tokio::test]
#[serial]
async fn timetable_requires_a_section_assignment() {
    let seed = seed_campus().await;

    let unplaced = student::Model::create_with_identity(
        &seed.db,
        "drifter@college.test",
        "secret123",
        "22CS099",
        "Drifter",
        None,
        2022,
    )
    .await
    .unwrap();
    let token = token_for(unplaced.user_id, Role::Student);

    let (status, json) =
        request(&seed.app, "GET", "/api/student/timetable", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Student section not found");

    // A placed student sees the section's slots.
    timetable::ActiveModel {
        id: NotSet,
        section_id: Set(seed.section_id),
        subject_id: Set(seed.subject_id),
        faculty_id: Set(seed.faculty.id),
        day: Set(timetable::DayOfWeek::Thursday),
        period: Set(4),
    }
    .insert(&seed.db)
    .await
    .unwrap();

    let token = token_for(seed.student.user_id, Role::Student);
    let (status, json) =
        request(&seed.app, "GET", "/api/student/timetable", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["subject_code"], "CS201");
    assert_eq!(rows[0]["faculty_name"], "Prof. Rao");
}

#[tokio::test]
#[serial]
async fn marks_view_reports_total_and_grade() {
    let seed = seed_campus().await;
    let token = token_for(seed.student.user_id, Role::Student);

    // 18 + 19 + 88 = 125 out of 140, an A.
    marks::Model::upsert(&seed.db, seed.student.id, seed.subject_id, 18, 19, 88)
        .await
        .unwrap();

    let (status, json) = request(&seed.app, "GET", "/api/student/marks", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total"], 125);
    assert_eq!(rows[0]["grade"], "A");
    assert_eq!(rows[0]["subject_code"], "CS201");
}

#[tokio::test]
#[serial]
async fn attendance_summary_counts_every_row() {
    let seed = seed_campus().await;
    let token = token_for(seed.student.user_id, Role::Student);

    let dates = [
        (NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(), true),
        (NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(), true),
        (NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(), false),
    ];
    for (date, present) in dates {
        attendance::Model::insert_bulk(
            &seed.db,
            seed.subject_id,
            date,
            &[(seed.student.id, present)],
        )
        .await
        .unwrap();
    }

    let (status, json) =
        request(&seed.app, "GET", "/api/student/attendance", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let records = json["data"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    // Newest first.
    assert_eq!(records[0]["date"], "2026-08-26");

    let summary = json["data"]["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0]["total"], 3);
    assert_eq!(summary[0]["present"], 2);
    let pct = summary[0]["percentage"].as_f64().unwrap();
    assert!((pct - 66.666).abs() < 0.01);
}

#[tokio::test]
#[serial]
async fn student_routes_reject_other_roles() {
    let seed = seed_campus().await;
    let faculty_token = token_for(seed.faculty.user_id, Role::Faculty);

    let (status, json) = request(
        &seed.app,
        "GET",
        "/api/student/profile",
        Some(&faculty_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Student access required");

    let (status, _) = request(&seed.app, "GET", "/api/student/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
