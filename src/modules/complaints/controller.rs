use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::complaints::model::{Complaint, ComplaintView, CreateComplaintDto};
use crate::modules::complaints::service::ComplaintService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint filed", body = Complaint)
    ),
    tag = "Complaints"
)]
#[instrument(skip(state, dto))]
pub async fn create_complaint(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<Complaint>), AppError> {
    let complaint = ComplaintService::create(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

#[utoipa::path(
    get,
    path = "/api/complaints/school/{school_id}",
    params(("school_id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "Complaints of the school", body = Vec<ComplaintView>),
        (status = 404, description = "No complaints found")
    ),
    tag = "Complaints"
)]
#[instrument(skip(state))]
pub async fn get_complaints(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<Vec<ComplaintView>>, AppError> {
    let complaints = ComplaintService::list_by_school(&state.store, school_id).await?;
    Ok(Json(complaints))
}
