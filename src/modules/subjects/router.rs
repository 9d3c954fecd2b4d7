use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_subjects, delete_class_subjects, delete_subject, delete_subjects, get_class_subjects,
    get_free_subjects, get_subject_detail, get_subjects,
};

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subjects))
        .route(
            "/school/{school_id}",
            get(get_subjects).delete(delete_subjects),
        )
        .route(
            "/class/{class_id}",
            get(get_class_subjects).delete(delete_class_subjects),
        )
        .route("/class/{class_id}/free", get(get_free_subjects))
        .route("/{id}", get(get_subject_detail).delete(delete_subject))
}
