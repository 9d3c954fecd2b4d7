use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_class, delete_class, delete_classes, get_class_detail, get_class_students, get_classes,
};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class))
        .route("/school/{school_id}", get(get_classes).delete(delete_classes))
        .route("/{id}", get(get_class_detail).delete(delete_class))
        .route("/{id}/students", get(get_class_students))
}
