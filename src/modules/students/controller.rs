use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::students::model::{
    ExamResultDto, RegisterStudentDto, StudentAttendanceDto, StudentDetail, StudentListView,
    StudentLoginDto, StudentLoginView, StudentView, UpdateStudentDto,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::{DeleteResult, OrMessage, UpdateResult};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students/register",
    request_body = RegisterStudentDto,
    responses(
        (status = 201, description = "Student registered", body = StudentView),
        (status = 400, description = "Roll number already exists")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterStudentDto>,
) -> Result<(StatusCode, Json<StudentView>), AppError> {
    let student = StudentService::register(&state.store, &state.hasher, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    post,
    path = "/api/students/login",
    request_body = StudentLoginDto,
    responses(
        (status = 200, description = "Login successful", body = StudentLoginView),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn student_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<StudentLoginDto>,
) -> Result<Json<StudentLoginView>, AppError> {
    let student = StudentService::login(&state.store, &state.hasher, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Students of the school, or a no-students message")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<OrMessage<Vec<StudentListView>>>, AppError> {
    let students = StudentService::list_by_school(&state.store, school_id).await?;
    Ok(Json(OrMessage::listing(students, "No students found")))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = StudentDetail),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentDetail>, AppError> {
    let detail = StudentService::get_detail(&state.store, id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentView),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<StudentView>, AppError> {
    let student = StudentService::update(&state.store, &state.hasher, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = StudentView),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentView>, AppError> {
    let deleted = StudentService::delete(&state.store, id).await?;
    Ok(Json(deleted))
}

#[utoipa::path(
    delete,
    path = "/api/students/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Students deleted, or a nothing-to-delete message")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_students(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<OrMessage<DeleteResult>>, AppError> {
    let deleted_count = StudentService::delete_all_for_school(&state.store, school_id).await?;
    if deleted_count == 0 {
        return Ok(Json(OrMessage::message("No students found to delete")));
    }
    Ok(Json(OrMessage::value(DeleteResult { deleted_count })))
}

#[utoipa::path(
    delete,
    path = "/api/students/class/{class_id}",
    params(("class_id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Students deleted, or a nothing-to-delete message")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_class_students(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<Json<OrMessage<DeleteResult>>, AppError> {
    let deleted_count = StudentService::delete_all_for_class(&state.store, class_id).await?;
    if deleted_count == 0 {
        return Ok(Json(OrMessage::message("No students found to delete")));
    }
    Ok(Json(OrMessage::value(DeleteResult { deleted_count })))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}/exam-result",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = ExamResultDto,
    responses(
        (status = 200, description = "Exam result recorded", body = StudentView),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_exam_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<ExamResultDto>,
) -> Result<Json<StudentView>, AppError> {
    let student = StudentService::upsert_exam_result(&state.store, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    post,
    path = "/api/students/{id}/attendance",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = StudentAttendanceDto,
    responses(
        (status = 200, description = "Attendance recorded", body = StudentView),
        (status = 400, description = "Maximum attendance limit reached"),
        (status = 404, description = "Student or subject not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn record_student_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<StudentAttendanceDto>,
) -> Result<Json<StudentView>, AppError> {
    let student = StudentService::record_attendance(&state.store, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/attendance/subject/{subject_id}",
    params(("subject_id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Attendance cleared", body = UpdateResult)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn clear_subject_attendance(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = StudentService::clear_attendance_for_subject(&state.store, subject_id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/students/attendance/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Attendance cleared", body = UpdateResult)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn clear_school_attendance(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = StudentService::clear_attendance_for_school(&state.store, school_id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}/attendance/subject/{subject_id}",
    params(
        ("id" = Uuid, Path, description = "Student ID"),
        ("subject_id" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Attendance cleared", body = UpdateResult)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn clear_student_subject_attendance(
    State(state): State<AppState>,
    Path((id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<UpdateResult>, AppError> {
    let result =
        StudentService::clear_attendance_entry_for_subject(&state.store, id, subject_id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}/attendance",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Attendance cleared", body = UpdateResult)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn clear_student_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = StudentService::clear_all_attendance(&state.store, id).await?;
    Ok(Json(result))
}
