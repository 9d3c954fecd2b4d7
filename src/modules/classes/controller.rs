use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{ClassDetail, CreateClassDto, SchoolClass};
use crate::modules::classes::service::ClassService;
use crate::modules::students::model::StudentView;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::DeleteResult;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = SchoolClass),
        (status = 409, description = "Class name already exists in this school")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<SchoolClass>), AppError> {
    let class = ClassService::create(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

#[utoipa::path(
    get,
    path = "/api/classes/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Classes of the school", body = Vec<SchoolClass>),
        (status = 404, description = "No classes found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<Vec<SchoolClass>>, AppError> {
    let classes = ClassService::list_by_school(&state.store, school_id).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class details", body = ClassDetail),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassDetail>, AppError> {
    let detail = ClassService::get_detail(&state.store, id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}/students",
    params(("id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Students of the class", body = Vec<StudentView>),
        (status = 404, description = "No students found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class_students(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<StudentView>>, AppError> {
    let students = ClassService::list_students(&state.store, id).await?;
    Ok(Json(students))
}

#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(("id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class deleted with its students, subjects and teachers", body = SchoolClass),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SchoolClass>, AppError> {
    let deleted = ClassService::delete(&state.store, id).await?;
    Ok(Json(deleted))
}

#[utoipa::path(
    delete,
    path = "/api/classes/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Classes deleted", body = DeleteResult),
        (status = 404, description = "No classes found to delete")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn delete_classes(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = ClassService::delete_all_for_school(&state.store, school_id).await?;
    Ok(Json(result))
}
