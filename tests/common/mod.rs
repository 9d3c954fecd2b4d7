#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use classtrack::config::cors::CorsConfig;
use classtrack::router::init_router;
use classtrack::state::AppState;
use classtrack::store::Store;
use classtrack::utils::password::PasswordHasher;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Fresh app over an in-memory store. Bcrypt cost is lowered so password
/// hashing does not dominate test time.
pub fn test_app() -> Router {
    let state = AppState {
        store: Store::in_memory().expect("Failed to open in-memory store"),
        hasher: PasswordHasher::with_cost(4),
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(value).unwrap())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

pub fn id_of(body: &Value) -> Uuid {
    body["id"].as_str().unwrap().parse().unwrap()
}

/// Registers a school and returns its id.
pub async fn register_school(app: &Router, name: &str, email: &str) -> Uuid {
    let (status, body) = post_json(
        app,
        "/api/schools/register",
        &json!({
            "school_name": name,
            "email": email,
            "password": "secret123"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

pub async fn create_class(app: &Router, school_id: Uuid, name: &str) -> Uuid {
    let (status, body) = post_json(
        app,
        "/api/classes",
        &json!({ "name": name, "school_id": school_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

/// Creates a single subject and returns its id.
pub async fn create_subject(
    app: &Router,
    school_id: Uuid,
    class_id: Uuid,
    name: &str,
    code: &str,
    sessions: u32,
) -> Uuid {
    let (status, body) = post_json(
        app,
        "/api/subjects",
        &json!({
            "school_id": school_id,
            "class_id": class_id,
            "subjects": [{ "name": name, "code": code, "sessions": sessions }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body[0])
}

pub async fn register_teacher(
    app: &Router,
    school_id: Uuid,
    class_id: Uuid,
    subject_id: Uuid,
    name: &str,
    email: &str,
) -> Uuid {
    let (status, body) = post_json(
        app,
        "/api/teachers/register",
        &json!({
            "name": name,
            "email": email,
            "password": "secret123",
            "school_id": school_id,
            "class_id": class_id,
            "subject_id": subject_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

pub async fn register_student(
    app: &Router,
    school_id: Uuid,
    class_id: Uuid,
    name: &str,
    roll_number: u32,
) -> Uuid {
    let (status, body) = post_json(
        app,
        "/api/students/register",
        &json!({
            "name": name,
            "roll_number": roll_number,
            "password": "secret123",
            "school_id": school_id,
            "class_id": class_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}
