use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::schools::model::{
    RegisterSchoolDto, SchoolLoginDto, SchoolView, UpdateSchoolDto,
};
use crate::modules::schools::service::SchoolService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::Message;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/schools/register",
    request_body = RegisterSchoolDto,
    responses(
        (status = 201, description = "School registered", body = SchoolView),
        (status = 409, description = "Email or school name already exists")
    ),
    tag = "Schools"
)]
#[instrument(skip(state, dto))]
pub async fn register_school(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterSchoolDto>,
) -> Result<(StatusCode, Json<SchoolView>), AppError> {
    let school = SchoolService::register(&state.store, &state.hasher, dto).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

#[utoipa::path(
    post,
    path = "/api/schools/login",
    request_body = SchoolLoginDto,
    responses(
        (status = 200, description = "Login successful", body = SchoolView),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
#[instrument(skip(state, dto))]
pub async fn school_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SchoolLoginDto>,
) -> Result<Json<SchoolView>, AppError> {
    let school = SchoolService::login(&state.store, &state.hasher, dto).await?;
    Ok(Json(school))
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(("id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "School details", body = SchoolView),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SchoolView>, AppError> {
    let school = SchoolService::get(&state.store, id).await?;
    Ok(Json(school))
}

#[utoipa::path(
    put,
    path = "/api/schools/{id}",
    params(("id" = Uuid, Path, description = "School ID")),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "School updated", body = SchoolView),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
#[instrument(skip(state, dto))]
pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSchoolDto>,
) -> Result<Json<SchoolView>, AppError> {
    let school = SchoolService::update(&state.store, &state.hasher, id, dto).await?;
    Ok(Json(school))
}

#[utoipa::path(
    delete,
    path = "/api/schools/{id}",
    params(("id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "School and all scoped records deleted", body = Message),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, AppError> {
    SchoolService::delete(&state.store, id).await?;
    Ok(Json(Message::new("School deleted successfully")))
}
