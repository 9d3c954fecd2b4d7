use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::notices::model::{CreateNoticeDto, Notice, UpdateNoticeDto};
use crate::modules::notices::service::NoticeService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::DeleteResult;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Notice posted", body = Notice)
    ),
    tag = "Notices"
)]
#[instrument(skip(state, dto))]
pub async fn create_notice(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateNoticeDto>,
) -> Result<(StatusCode, Json<Notice>), AppError> {
    let notice = NoticeService::create(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

#[utoipa::path(
    get,
    path = "/api/notices/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Notices of the school", body = Vec<Notice>),
        (status = 404, description = "No notices found")
    ),
    tag = "Notices"
)]
#[instrument(skip(state))]
pub async fn get_notices(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<Vec<Notice>>, AppError> {
    let notices = NoticeService::list_by_school(&state.store, school_id).await?;
    Ok(Json(notices))
}

#[utoipa::path(
    put,
    path = "/api/notices/{id}",
    params(("id" = Uuid, Path, description = "Notice ID")),
    request_body = UpdateNoticeDto,
    responses(
        (status = 200, description = "Notice updated", body = Notice),
        (status = 404, description = "Notice not found")
    ),
    tag = "Notices"
)]
#[instrument(skip(state, dto))]
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateNoticeDto>,
) -> Result<Json<Notice>, AppError> {
    let notice = NoticeService::update(&state.store, id, dto).await?;
    Ok(Json(notice))
}

#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    params(("id" = Uuid, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Notice deleted", body = Notice),
        (status = 404, description = "Notice not found")
    ),
    tag = "Notices"
)]
#[instrument(skip(state))]
pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notice>, AppError> {
    let deleted = NoticeService::delete(&state.store, id).await?;
    Ok(Json(deleted))
}

#[utoipa::path(
    delete,
    path = "/api/notices/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Notices deleted", body = DeleteResult),
        (status = 404, description = "No notices found to delete")
    ),
    tag = "Notices"
)]
#[instrument(skip(state))]
pub async fn delete_notices(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = NoticeService::delete_all_for_school(&state.store, school_id).await?;
    Ok(Json(result))
}
