mod common;

use axum::http::StatusCode;
use common::{
    create_class, create_subject, delete, get, post_json, put_json, register_school,
    register_student, test_app,
};
use serde_json::json;
use uuid::Uuid;

struct Fixture {
    school_id: Uuid,
    class_id: Uuid,
    subject_id: Uuid,
}

async fn seed(app: &axum::Router) -> Fixture {
    let school_id = register_school(app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(app, school_id, "5A").await;
    let subject_id = create_subject(app, school_id, class_id, "Math", "MTH101", 3).await;
    Fixture {
        school_id,
        class_id,
        subject_id,
    }
}

#[tokio::test]
async fn test_register_student() {
    let app = test_app();
    let fx = seed(&app).await;

    let (status, body) = post_json(
        &app,
        "/api/students/register",
        &json!({
            "name": "Alpha",
            "roll_number": 1,
            "password": "secret123",
            "school_id": fx.school_id,
            "class_id": fx.class_id
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Alpha");
    assert_eq!(body["roll_number"], 1);
    assert!(body.get("password").is_none());
    assert!(body["exam_results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_student_duplicate_roll_number() {
    let app = test_app();
    let fx = seed(&app).await;
    register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    let (status, body) = post_json(
        &app,
        "/api/students/register",
        &json!({
            "name": "Beta",
            "roll_number": 1,
            "password": "secret123",
            "school_id": fx.school_id,
            "class_id": fx.class_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Roll number already exists");

    // The same roll number is fine in a different class.
    let other_class = create_class(&app, fx.school_id, "5B").await;
    let (status, _) = post_json(
        &app,
        "/api/students/register",
        &json!({
            "name": "Beta",
            "roll_number": 1,
            "password": "secret123",
            "school_id": fx.school_id,
            "class_id": other_class
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_student_login() {
    let app = test_app();
    let fx = seed(&app).await;
    register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    let (status, body) = post_json(
        &app,
        "/api/students/login",
        &json!({ "roll_number": 1, "student_name": "Alpha", "password": "secret123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_name"], "5A");
    assert_eq!(body["school_name"], "Northside High");
    assert!(body.get("password").is_none());
    assert!(body.get("exam_results").is_none());

    let (status, body) = post_json(
        &app,
        "/api/students/login",
        &json!({ "roll_number": 1, "student_name": "Alpha", "password": "wrongpass" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid password");

    let (status, body) = post_json(
        &app,
        "/api/students/login",
        &json!({ "roll_number": 9, "student_name": "Alpha", "password": "secret123" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn test_get_student_detail_resolves_subjects() {
    let app = test_app();
    let fx = seed(&app).await;
    let student_id = register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    put_json(
        &app,
        &format!("/api/students/{student_id}/exam-result"),
        &json!({ "subject_id": fx.subject_id, "marks_obtained": 80 }),
    )
    .await;
    post_json(
        &app,
        &format!("/api/students/{student_id}/attendance"),
        &json!({
            "subject_id": fx.subject_id,
            "date": "2026-03-02T09:00:00Z",
            "status": "Present"
        }),
    )
    .await;

    let (status, body) = get(&app, &format!("/api/students/{student_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_name"], "5A");
    assert_eq!(body["school_name"], "Northside High");
    assert_eq!(body["exam_results"][0]["subject_name"], "Math");
    assert_eq!(body["attendance"][0]["subject_name"], "Math");
    assert_eq!(body["attendance"][0]["sessions"], 3);
}

#[tokio::test]
async fn test_get_student_not_found() {
    let app = test_app();

    let (status, body) = get(
        &app,
        "/api/students/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No student found");
}

#[tokio::test]
async fn test_update_student_rehashes_password() {
    let app = test_app();
    let fx = seed(&app).await;
    let student_id = register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    let (status, body) = put_json(
        &app,
        &format!("/api/students/{student_id}"),
        &json!({ "name": "Alpha Prime", "password": "newpass99" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alpha Prime");

    let (status, _) = post_json(
        &app,
        "/api/students/login",
        &json!({ "roll_number": 1, "student_name": "Alpha Prime", "password": "newpass99" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_students_bulk_reports_message_on_zero() {
    let app = test_app();
    let fx = seed(&app).await;

    let (status, body) = delete(&app, &format!("/api/students/school/{}", fx.school_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No students found to delete");

    register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;
    register_student(&app, fx.school_id, fx.class_id, "Beta", 2).await;

    let (status, body) = delete(&app, &format!("/api/students/class/{}", fx.class_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 2);
}

#[tokio::test]
async fn test_exam_result_upserts_per_subject() {
    let app = test_app();
    let fx = seed(&app).await;
    let student_id = register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    let (status, body) = put_json(
        &app,
        &format!("/api/students/{student_id}/exam-result"),
        &json!({ "subject_id": fx.subject_id, "marks_obtained": 60 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exam_results"].as_array().unwrap().len(), 1);

    // A second submission for the same subject overwrites the marks.
    let (_, body) = put_json(
        &app,
        &format!("/api/students/{student_id}/exam-result"),
        &json!({ "subject_id": fx.subject_id, "marks_obtained": 85 }),
    )
    .await;
    let results = body["exam_results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["marks_obtained"], 85);
}

#[tokio::test]
async fn test_attendance_capacity_limit() {
    let app = test_app();
    let fx = seed(&app).await; // Math has 3 sessions
    let student_id = register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    for day in ["02", "03", "04"] {
        let (status, _) = post_json(
            &app,
            &format!("/api/students/{student_id}/attendance"),
            &json!({
                "subject_id": fx.subject_id,
                "date": format!("2026-03-{day}T09:00:00Z"),
                "status": "Present"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // A fourth distinct day exceeds the subject's session count.
    let (status, body) = post_json(
        &app,
        &format!("/api/students/{student_id}/attendance"),
        &json!({
            "subject_id": fx.subject_id,
            "date": "2026-03-05T09:00:00Z",
            "status": "Present"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Maximum attendance limit reached");

    // Overwriting an already-recorded day never consumes capacity.
    let (status, body) = post_json(
        &app,
        &format!("/api/students/{student_id}/attendance"),
        &json!({
            "subject_id": fx.subject_id,
            "date": "2026-03-03T17:00:00Z",
            "status": "Absent"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let attendance = body["attendance"].as_array().unwrap();
    assert_eq!(attendance.len(), 3);
    assert_eq!(attendance[1]["status"], "Absent");
}

#[tokio::test]
async fn test_record_attendance_unknown_subject() {
    let app = test_app();
    let fx = seed(&app).await;
    let student_id = register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;

    let (status, body) = post_json(
        &app,
        &format!("/api/students/{student_id}/attendance"),
        &json!({
            "subject_id": "00000000-0000-0000-0000-000000000000",
            "date": "2026-03-02T09:00:00Z",
            "status": "Present"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Subject not found");
}

#[tokio::test]
async fn test_clear_attendance_scopes() {
    let app = test_app();
    let fx = seed(&app).await;
    let history =
        create_subject(&app, fx.school_id, fx.class_id, "History", "HIS101", 5).await;
    let alpha = register_student(&app, fx.school_id, fx.class_id, "Alpha", 1).await;
    let beta = register_student(&app, fx.school_id, fx.class_id, "Beta", 2).await;

    for (student, subject) in [
        (alpha, fx.subject_id),
        (alpha, history),
        (beta, fx.subject_id),
    ] {
        post_json(
            &app,
            &format!("/api/students/{student}/attendance"),
            &json!({
                "subject_id": subject,
                "date": "2026-03-02T09:00:00Z",
                "status": "Present"
            }),
        )
        .await;
    }

    // One student, one subject.
    let (status, body) = delete(
        &app,
        &format!("/api/students/{alpha}/attendance/subject/{}", fx.subject_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modified_count"], 1);
    let (_, detail) = get(&app, &format!("/api/students/{alpha}")).await;
    assert_eq!(detail["attendance"].as_array().unwrap().len(), 1);

    // Every student holding entries for a subject.
    let (status, body) = delete(
        &app,
        &format!("/api/students/attendance/subject/{}", fx.subject_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modified_count"], 1);

    // School-wide wipe.
    let (status, body) = delete(
        &app,
        &format!("/api/students/attendance/school/{}", fx.school_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modified_count"], 2);
    let (_, detail) = get(&app, &format!("/api/students/{alpha}")).await;
    assert!(detail["attendance"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_attendance_is_vacuously_successful() {
    let app = test_app();

    let (status, body) = delete(
        &app,
        "/api/students/00000000-0000-0000-0000-000000000000/attendance",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modified_count"], 0);
}
