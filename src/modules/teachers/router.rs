use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    delete_class_teachers, delete_teacher, delete_teachers, get_teacher_detail, get_teachers,
    reassign_teacher_subject, record_teacher_attendance, register_teacher, teacher_login,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_teacher))
        .route("/login", post(teacher_login))
        .route(
            "/school/{school_id}",
            get(get_teachers).delete(delete_teachers),
        )
        .route("/class/{class_id}", delete(delete_class_teachers))
        .route("/{id}", get(get_teacher_detail).delete(delete_teacher))
        .route("/{id}/subject", put(reassign_teacher_subject))
        .route("/{id}/attendance", post(record_teacher_attendance))
}
