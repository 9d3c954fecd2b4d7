mod common;

use axum::http::StatusCode;
use common::{
    create_class, create_subject, delete, get, post_json, put_json, register_school,
    register_student, register_teacher, test_app,
};
use serde_json::json;

#[tokio::test]
async fn test_create_subjects_batch() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;

    let (status, body) = post_json(
        &app,
        "/api/subjects",
        &json!({
            "school_id": school_id,
            "class_id": class_id,
            "subjects": [
                { "name": "Math", "code": "MTH101", "sessions": 10 },
                { "name": "History", "code": "HIS101", "sessions": 8 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let subjects = body.as_array().unwrap();
    assert_eq!(subjects.len(), 2);
    assert!(subjects.iter().all(|s| s["teacher_id"].is_null()));
}

#[tokio::test]
async fn test_create_subjects_duplicate_code_checks_first_only() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;
    create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;

    // A duplicate code in the first slot is rejected.
    let (status, body) = post_json(
        &app,
        "/api/subjects",
        &json!({
            "school_id": school_id,
            "class_id": class_id,
            "subjects": [{ "name": "Math II", "code": "MTH101", "sessions": 10 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Subject code must be unique; it already exists");

    // Only the first element's code is checked; later duplicates slip through.
    let (status, _) = post_json(
        &app,
        "/api/subjects",
        &json!({
            "school_id": school_id,
            "class_id": class_id,
            "subjects": [
                { "name": "Biology", "code": "BIO101", "sessions": 10 },
                { "name": "Math II", "code": "MTH101", "sessions": 10 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_subjects_resolves_class_name() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;
    create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;

    let (status, body) = get(&app, &format!("/api/subjects/school/{school_id}")).await;

    assert_eq!(status, StatusCode::OK);
    let subjects = body.as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["class_name"], "5A");
}

#[tokio::test]
async fn test_list_subjects_empty_message() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;

    let (status, body) = get(&app, &format!("/api/subjects/school/{school_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No subjects found");

    let class_id = create_class(&app, school_id, "5A").await;
    let (status, body) = get(&app, &format!("/api/subjects/class/{class_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No subjects found");
}

#[tokio::test]
async fn test_free_subjects_excludes_assigned() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;
    let math = create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;
    let history = create_subject(&app, school_id, class_id, "History", "HIS101", 8).await;
    register_teacher(
        &app,
        school_id,
        class_id,
        math,
        "Ada Byron",
        "ada@northside.edu",
    )
    .await;

    let (status, body) = get(&app, &format!("/api/subjects/class/{class_id}/free")).await;

    assert_eq!(status, StatusCode::OK);
    let free = body.as_array().unwrap();
    assert_eq!(free.len(), 1);
    assert_eq!(free[0]["id"], history.to_string());
}

#[tokio::test]
async fn test_get_subject_detail() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;
    let subject_id = create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;
    register_teacher(
        &app,
        school_id,
        class_id,
        subject_id,
        "Ada Byron",
        "ada@northside.edu",
    )
    .await;

    let (status, body) = get(&app, &format!("/api/subjects/{subject_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_name"], "5A");
    assert_eq!(body["teacher_name"], "Ada Byron");

    let (status, body) = get(
        &app,
        "/api/subjects/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No subject found");
}

#[tokio::test]
async fn test_delete_subject_unassigns_teacher_and_scrubs_students() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;
    let math = create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;
    let history = create_subject(&app, school_id, class_id, "History", "HIS101", 8).await;
    let teacher_id = register_teacher(
        &app,
        school_id,
        class_id,
        math,
        "Ada Byron",
        "ada@northside.edu",
    )
    .await;
    let student_id = register_student(&app, school_id, class_id, "Alpha", 1).await;

    put_json(
        &app,
        &format!("/api/students/{student_id}/exam-result"),
        &json!({ "subject_id": math, "marks_obtained": 80 }),
    )
    .await;
    put_json(
        &app,
        &format!("/api/students/{student_id}/exam-result"),
        &json!({ "subject_id": history, "marks_obtained": 70 }),
    )
    .await;
    post_json(
        &app,
        &format!("/api/students/{student_id}/attendance"),
        &json!({
            "subject_id": math,
            "date": "2026-03-02T09:00:00Z",
            "status": "Present"
        }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/subjects/{math}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, teacher) = get(&app, &format!("/api/teachers/{teacher_id}")).await;
    assert!(teacher["subject_id"].is_null());

    // Only the deleted subject's results and attendance are scrubbed.
    let (_, student) = get(&app, &format!("/api/students/{student_id}")).await;
    let results = student["exam_results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["subject_id"], history.to_string());
    assert!(student["attendance"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_subjects_by_class_reports_count() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;

    // Bulk subject deletes succeed even with nothing to delete.
    let (status, body) = delete(&app, &format!("/api/subjects/class/{class_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 0);

    create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;
    create_subject(&app, school_id, class_id, "History", "HIS101", 8).await;

    let (status, body) = delete(&app, &format!("/api/subjects/class/{class_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 2);
}
