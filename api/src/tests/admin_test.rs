use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use serial_test::serial;

use db::models::user::{Entity as UserEntity, Role};
use db::models::{student, user};

use super::{request, seed_campus, setup_app, token_for};

#[tokio::test]
#[serial]
async fn health_check_is_public() {
    let (app, _db) = setup_app().await;

    let (status, json) = request(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "OK");
}

#[tokio::test]
#[serial]
async fn admin_routes_reject_other_roles() {
    let seed = seed_campus().await;
    let student_token = token_for(seed.student.user_id, Role::Student);

    let (status, _) = request(&seed.app, "GET", "/api/admin/departments", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) = request(
        &seed.app,
        "GET",
        "/api/admin/departments",
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Admin access required");
}

#[tokio::test]
#[serial]
async fn department_codes_are_unique() {
    let seed = seed_campus().await;

    let (status, created) = request(
        &seed.app,
        "POST",
        "/api/admin/departments",
        Some(&seed.admin_token),
        Some(json!({ "name": "Electronics", "code": "ece" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Codes are stored uppercased.
    assert_eq!(created["data"]["code"], "ECE");

    let (status, json) = request(
        &seed.app,
        "POST",
        "/api/admin/departments",
        Some(&seed.admin_token),
        Some(json!({ "name": "Electronics Again", "code": "ECE" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "A department with this code already exists");
}

#[tokio::test]
#[serial]
async fn department_update_and_delete() {
    let seed = seed_campus().await;

    let uri = format!("/api/admin/departments/{}", seed.dept_id);
    let (status, json) = request(
        &seed.app,
        "PUT",
        &uri,
        Some(&seed.admin_token),
        Some(json!({ "name": "Computer Science & Engg", "code": "CSE" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Computer Science & Engg");

    let (status, _) = request(
        &seed.app,
        "DELETE",
        "/api/admin/departments/9999",
        Some(&seed.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&seed.app, "DELETE", &uri, Some(&seed.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn student_create_is_atomic_across_identity_and_profile() {
    let seed = seed_campus().await;

    let (status, created) = request(
        &seed.app,
        "POST",
        "/api/admin/students",
        Some(&seed.admin_token),
        Some(json!({
            "email": "ravi@college.test",
            "password": "secret123",
            "roll_no": "22CS011",
            "name": "Ravi",
            "section_id": seed.section_id,
            "admission_year": 2022
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = created["data"]["user_id"].as_i64().unwrap();
    assert!(
        user::Model::get_by_id(&seed.db, user_id)
            .await
            .unwrap()
            .is_some()
    );

    let users_before = UserEntity::find().count(&seed.db).await.unwrap();

    // Duplicate roll number: the profile insert fails and the fresh
    // identity is rolled back.
    let (status, json) = request(
        &seed.app,
        "POST",
        "/api/admin/students",
        Some(&seed.admin_token),
        Some(json!({
            "email": "someone-else@college.test",
            "password": "secret123",
            "roll_no": "22CS011",
            "name": "Someone Else",
            "section_id": seed.section_id,
            "admission_year": 2022
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["message"],
        "A student with this roll number already exists"
    );
    assert_eq!(
        UserEntity::find().count(&seed.db).await.unwrap(),
        users_before
    );
}

#[tokio::test]
#[serial]
async fn student_delete_removes_profile_and_identity() {
    let seed = seed_campus().await;

    let uri = format!("/api/admin/students/{}", seed.student.id);
    let (status, _) = request(&seed.app, "DELETE", &uri, Some(&seed.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);

    assert!(
        student::Entity::find_by_id(seed.student.id)
            .one(&seed.db)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        user::Model::get_by_id(&seed.db, seed.student.user_id)
            .await
            .unwrap()
            .is_none()
    );

    let (status, _) = request(&seed.app, "DELETE", &uri, Some(&seed.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn student_listing_filters_by_section() {
    let seed = seed_campus().await;

    let (status, _) = request(
        &seed.app,
        "POST",
        "/api/admin/students",
        Some(&seed.admin_token),
        Some(json!({
            "email": "nila@college.test",
            "password": "secret123",
            "roll_no": "22CS012",
            "name": "Nila",
            "section_id": null,
            "admission_year": 2022
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, all) = request(
        &seed.app,
        "GET",
        "/api/admin/students",
        Some(&seed.admin_token),
        None,
    )
    .await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let uri = format!("/api/admin/students?section_id={}", seed.section_id);
    let (_, filtered) = request(&seed.app, "GET", &uri, Some(&seed.admin_token), None).await;
    let rows = filtered["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["roll_no"], "22CS010");
    assert_eq!(rows[0]["section_name"], "CSE-A");
}

#[tokio::test]
#[serial]
async fn faculty_listing_reports_assignment_counts() {
    let seed = seed_campus().await;

    let (_, listing) = request(
        &seed.app,
        "GET",
        "/api/admin/faculty",
        Some(&seed.admin_token),
        None,
    )
    .await;
    let row = &listing["data"].as_array().unwrap()[0];
    assert_eq!(row["timetable_count"], 0);
    assert_eq!(row["has_assignments"], false);

    let (status, _) = request(
        &seed.app,
        "POST",
        "/api/timetable",
        Some(&seed.admin_token),
        Some(json!({
            "section_id": seed.section_id,
            "subject_id": seed.subject_id,
            "faculty_id": seed.faculty.id,
            "day": "Monday",
            "period": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listing) = request(
        &seed.app,
        "GET",
        "/api/admin/faculty",
        Some(&seed.admin_token),
        None,
    )
    .await;
    let row = &listing["data"].as_array().unwrap()[0];
    assert_eq!(row["timetable_count"], 1);
    assert_eq!(row["has_assignments"], true);
}

#[tokio::test]
#[serial]
async fn stats_reflect_seeded_rows() {
    let seed = seed_campus().await;

    let (status, json) = request(
        &seed.app,
        "GET",
        "/api/stats/admin",
        Some(&seed.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total_students"], 1);
    assert_eq!(json["data"]["total_faculty"], 1);
    assert_eq!(json["data"]["total_departments"], 1);
    assert_eq!(json["data"]["total_subjects"], 1);

    let (status, json) = request(
        &seed.app,
        "GET",
        "/api/stats/departments",
        Some(&seed.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dept = &json["data"].as_array().unwrap()[0];
    assert_eq!(dept["code"], "CSE");
    assert_eq!(dept["sections_count"], 1);
    assert_eq!(dept["students_count"], 1);
    assert_eq!(dept["faculty_count"], 1);
}
