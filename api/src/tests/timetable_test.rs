use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use db::models::user::Role;

use super::{request, seed_campus, token_for};

#[tokio::test]
#[serial]
async fn create_rejects_second_slot_at_same_section_day_period() {
    let seed = seed_campus().await;

    let body = json!({
        "section_id": seed.section_id,
        "subject_id": seed.subject_id,
        "faculty_id": seed.faculty.id,
        "day": "Monday",
        "period": 1
    });

    let (status, _) = request(
        &seed.app,
        "POST",
        "/api/timetable",
        Some(&seed.admin_token),
        Some(body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = request(
        &seed.app,
        "POST",
        "/api/timetable",
        Some(&seed.admin_token),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Timetable conflict: This section already has a class scheduled for this day and period"
    );

    // A different period is accepted.
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
            "period": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
#[serial]
async fn full_coordinate_update_rechecks_conflicts() {
    let seed = seed_campus().await;

    for period in [1, 2] {
        let (status, _) = request(
            &seed.app,
            "POST",
            "/api/timetable",
            Some(&seed.admin_token),
            Some(json!({
                "section_id": seed.section_id,
                "subject_id": seed.subject_id,
                "faculty_id": seed.faculty.id,
                "day": "Tuesday",
                "period": period
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listing) = request(
        &seed.app,
        "GET",
        "/api/timetable",
        Some(&seed.admin_token),
        None,
    )
    .await;
    let second_id = listing["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|slot| slot["period"] == 2)
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, json) = request(
        &seed.app,
        "PUT",
        &format!("/api/timetable/{second_id}"),
        Some(&seed.admin_token),
        Some(json!({
            "section_id": seed.section_id,
            "day": "Tuesday",
            "period": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Timetable conflict")
    );
}

#[tokio::test]
#[serial]
async fn partial_update_writes_without_conflict_recheck() {
    let seed = seed_campus().await;

    for period in [1, 2] {
        let (status, _) = request(
            &seed.app,
            "POST",
            "/api/timetable",
            Some(&seed.admin_token),
            Some(json!({
                "section_id": seed.section_id,
                "subject_id": seed.subject_id,
                "faculty_id": seed.faculty.id,
                "day": "Wednesday",
                "period": period
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listing) = request(
        &seed.app,
        "GET",
        "/api/timetable",
        Some(&seed.admin_token),
        None,
    )
    .await;
    let second_id = listing["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|slot| slot["period"] == 2)
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    // Only the period changes, so the overlap check does not run and the
    // write lands on an already occupied (day, period).
    let (status, _) = request(
        &seed.app,
        "PUT",
        &format!("/api/timetable/{second_id}"),
        Some(&seed.admin_token),
        Some(json!({ "period": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = request(
        &seed.app,
        "GET",
        "/api/timetable",
        Some(&seed.admin_token),
        None,
    )
    .await;
    let occupied = listing["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|slot| slot["day"] == "Wednesday" && slot["period"] == 1)
        .count();
    assert_eq!(occupied, 2);
}

#[tokio::test]
#[serial]
async fn writes_are_admin_only_and_reads_need_a_token() {
    let seed = seed_campus().await;
    let faculty_token = token_for(seed.faculty.user_id, Role::Faculty);
    let student_token = token_for(seed.student.user_id, Role::Student);

    let body = json!({
        "section_id": seed.section_id,
        "subject_id": seed.subject_id,
        "faculty_id": seed.faculty.id,
        "day": "Friday",
        "period": 3
    });

    let (status, _) = request(&seed.app, "POST", "/api/timetable", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) = request(
        &seed.app,
        "POST",
        "/api/timetable",
        Some(&faculty_token),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Admin access required");

    let (status, _) = request(
        &seed.app,
        "GET",
        "/api/timetable",
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&seed.app, "GET", "/api/timetable", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn period_out_of_range_is_rejected() {
    let seed = seed_campus().await;

    let (status, json) = request(
        &seed.app,
        "POST",
        "/api/timetable",
        Some(&seed.admin_token),
        Some(json!({
            "section_id": seed.section_id,
            "subject_id": seed.subject_id,
            "faculty_id": seed.faculty.id,
            "day": "Monday",
            "period": 9
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("Period must be between 1 and 8")
    );
}
