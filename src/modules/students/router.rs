use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    clear_school_attendance, clear_student_attendance, clear_student_subject_attendance,
    clear_subject_attendance, delete_class_students, delete_student, delete_students,
    get_student_detail, get_students, record_student_attendance, register_student, student_login,
    update_exam_result, update_student,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_student))
        .route("/login", post(student_login))
        .route(
            "/school/{school_id}",
            get(get_students).delete(delete_students),
        )
        .route("/class/{class_id}", delete(delete_class_students))
        .route(
            "/attendance/subject/{subject_id}",
            delete(clear_subject_attendance),
        )
        .route(
            "/attendance/school/{school_id}",
            delete(clear_school_attendance),
        )
        .route(
            "/{id}",
            get(get_student_detail)
                .put(update_student)
                .delete(delete_student),
        )
        .route("/{id}/exam-result", put(update_exam_result))
        .route(
            "/{id}/attendance",
            post(record_student_attendance).delete(clear_student_attendance),
        )
        .route(
            "/{id}/attendance/subject/{subject_id}",
            delete(clear_student_subject_attendance),
        )
}
