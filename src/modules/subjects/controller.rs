use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::subjects::model::{CreateSubjectsDto, Subject, SubjectDetail, SubjectListView};
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::{DeleteResult, OrMessage};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectsDto,
    responses(
        (status = 201, description = "Subjects created", body = Vec<Subject>),
        (status = 400, description = "Subject code already exists")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn create_subjects(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectsDto>,
) -> Result<(StatusCode, Json<Vec<Subject>>), AppError> {
    let subjects = SubjectService::create_batch(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(subjects)))
}

#[utoipa::path(
    get,
    path = "/api/subjects/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Subjects of the school, or a no-subjects message")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<OrMessage<Vec<SubjectListView>>>, AppError> {
    let subjects = SubjectService::list_by_school(&state.store, school_id).await?;
    Ok(Json(OrMessage::listing(subjects, "No subjects found")))
}

#[utoipa::path(
    get,
    path = "/api/subjects/class/{class_id}",
    params(("class_id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Subjects of the class, or a no-subjects message")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_class_subjects(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<Json<OrMessage<Vec<Subject>>>, AppError> {
    let subjects = SubjectService::list_by_class(&state.store, class_id).await?;
    Ok(Json(OrMessage::listing(subjects, "No subjects found")))
}

#[utoipa::path(
    get,
    path = "/api/subjects/class/{class_id}/free",
    params(("class_id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Unassigned subjects of the class, or a no-subjects message")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_free_subjects(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<Json<OrMessage<Vec<Subject>>>, AppError> {
    let subjects = SubjectService::list_free(&state.store, class_id).await?;
    Ok(Json(OrMessage::listing(subjects, "No subjects found")))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject details", body = SubjectDetail),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subject_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubjectDetail>, AppError> {
    let detail = SubjectService::get_detail(&state.store, id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject deleted and references scrubbed", body = Subject),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Subject>, AppError> {
    let deleted = SubjectService::delete(&state.store, id).await?;
    Ok(Json(deleted))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Subjects deleted", body = DeleteResult)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_subjects(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = SubjectService::delete_all_for_school(&state.store, school_id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/class/{class_id}",
    params(("class_id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Subjects deleted", body = DeleteResult)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_class_subjects(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = SubjectService::delete_all_for_class(&state.store, class_id).await?;
    Ok(Json(result))
}
