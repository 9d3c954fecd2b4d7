mod common;

use axum::http::StatusCode;
use common::{
    create_class, create_subject, delete, get, post_json, register_school, register_student,
    register_teacher, test_app,
};
use serde_json::json;

#[tokio::test]
async fn test_create_class() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;

    let (status, body) = post_json(
        &app,
        "/api/classes",
        &json!({ "name": "5A", "school_id": school_id }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "5A");
    assert_eq!(body["school_id"], school_id.to_string());
}

#[tokio::test]
async fn test_create_class_duplicate_name_conflict() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    create_class(&app, school_id, "5A").await;

    let (status, body) = post_json(
        &app,
        "/api/classes",
        &json!({ "name": "5A", "school_id": school_id }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Class name already exists");
}

#[tokio::test]
async fn test_create_class_same_name_other_school() {
    let app = test_app();
    let first = register_school(&app, "Northside High", "admin@northside.edu").await;
    let second = register_school(&app, "Southside High", "admin@southside.edu").await;
    create_class(&app, first, "5A").await;

    // Names are only unique within a school.
    let (status, _) = post_json(
        &app,
        "/api/classes",
        &json!({ "name": "5A", "school_id": second }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_classes_empty_school() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;

    let (status, body) = get(&app, &format!("/api/classes/school/{school_id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No classes found");
}

#[tokio::test]
async fn test_get_class_detail_resolves_school_name() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;

    let (status, body) = get(&app, &format!("/api/classes/{class_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "5A");
    assert_eq!(body["school_name"], "Northside High");
}

#[tokio::test]
async fn test_get_class_detail_not_found() {
    let app = test_app();

    let (status, body) = get(
        &app,
        "/api/classes/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No class found");
}

#[tokio::test]
async fn test_list_class_students() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;

    let (status, body) = get(&app, &format!("/api/classes/{class_id}/students")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No students found");

    register_student(&app, school_id, class_id, "Alpha", 1).await;
    register_student(&app, school_id, class_id, "Beta", 2).await;

    let (status, body) = get(&app, &format!("/api/classes/{class_id}/students")).await;
    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s.get("password").is_none()));
}

#[tokio::test]
async fn test_delete_class_cascades_members() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;
    let class_id = create_class(&app, school_id, "5A").await;
    let other_class = create_class(&app, school_id, "5B").await;
    let subject_id = create_subject(&app, school_id, class_id, "Math", "MTH101", 10).await;
    let other_subject =
        create_subject(&app, school_id, other_class, "History", "HIS101", 10).await;
    let teacher_id = register_teacher(
        &app,
        school_id,
        class_id,
        subject_id,
        "Ada Byron",
        "ada@northside.edu",
    )
    .await;
    let student_id = register_student(&app, school_id, class_id, "Alpha", 1).await;
    let surviving_student = register_student(&app, school_id, other_class, "Beta", 1).await;

    let (status, _) = delete(&app, &format!("/api/classes/{class_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/api/students/{student_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/teachers/{teacher_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/subjects/{subject_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The sibling class is untouched.
    let (status, _) = get(&app, &format!("/api/students/{surviving_student}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, &format!("/api/subjects/{other_subject}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_class_not_found() {
    let app = test_app();

    let (status, body) = delete(
        &app,
        "/api/classes/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Class not found");
}

#[tokio::test]
async fn test_delete_all_classes_for_school() {
    let app = test_app();
    let school_id = register_school(&app, "Northside High", "admin@northside.edu").await;

    let (status, body) = delete(&app, &format!("/api/classes/school/{school_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No classes found to delete");

    create_class(&app, school_id, "5A").await;
    create_class(&app, school_id, "5B").await;

    let (status, body) = delete(&app, &format!("/api/classes/school/{school_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 2);
}
