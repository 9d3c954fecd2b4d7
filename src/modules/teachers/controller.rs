use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::{
    RegisterTeacherDto, ReassignSubjectDto, TeacherAttendanceDto, TeacherDetail, TeacherListView,
    TeacherLoginDto, TeacherView,
};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::{DeleteResult, OrMessage};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/teachers/register",
    request_body = RegisterTeacherDto,
    responses(
        (status = 201, description = "Teacher registered and subject assigned", body = TeacherView),
        (status = 400, description = "Email already exists")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn register_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterTeacherDto>,
) -> Result<(StatusCode, Json<TeacherView>), AppError> {
    let teacher = TeacherService::register(&state.store, &state.hasher, dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    post,
    path = "/api/teachers/login",
    request_body = TeacherLoginDto,
    responses(
        (status = 200, description = "Login successful", body = TeacherDetail),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn teacher_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TeacherLoginDto>,
) -> Result<Json<TeacherDetail>, AppError> {
    let teacher = TeacherService::login(&state.store, &state.hasher, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    get,
    path = "/api/teachers/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Teachers of the school, or a no-teachers message")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<OrMessage<Vec<TeacherListView>>>, AppError> {
    let teachers = TeacherService::list_by_school(&state.store, school_id).await?;
    Ok(Json(OrMessage::listing(teachers, "No teachers found")))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher details", body = TeacherDetail),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherDetail>, AppError> {
    let detail = TeacherService::get_detail(&state.store, id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}/subject",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = ReassignSubjectDto,
    responses(
        (status = 200, description = "Teacher reassigned", body = TeacherView),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn reassign_teacher_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<ReassignSubjectDto>,
) -> Result<Json<TeacherView>, AppError> {
    let teacher = TeacherService::reassign_subject(&state.store, id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    post,
    path = "/api/teachers/{id}/attendance",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = TeacherAttendanceDto,
    responses(
        (status = 200, description = "Attendance recorded", body = TeacherView),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn record_teacher_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<TeacherAttendanceDto>,
) -> Result<Json<TeacherView>, AppError> {
    let teacher = TeacherService::record_attendance(&state.store, id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted and subjects unassigned", body = TeacherView),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherView>, AppError> {
    let deleted = TeacherService::delete(&state.store, id).await?;
    Ok(Json(deleted))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Teachers deleted", body = DeleteResult),
        (status = 404, description = "No teachers found to delete")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teachers(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = TeacherService::delete_all_for_school(&state.store, school_id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/class/{class_id}",
    params(("class_id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Teachers deleted", body = DeleteResult),
        (status = 404, description = "No teachers found to delete")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_class_teachers(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = TeacherService::delete_all_for_class(&state.store, class_id).await?;
    Ok(Json(result))
}
