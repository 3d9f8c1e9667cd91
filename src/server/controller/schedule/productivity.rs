use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{ProductivityDto, SaveProductivityDto},
    },
    server::{
        controller::{schedule::SCHEDULE_TAG, util::access::require_supervisor},
        error::Error,
        model::app::AppState,
        service::schedule::productivity::ProductivityService,
    },
};

#[derive(Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductivityParams {
    /// Only list entries of this cycle
    pub cycle_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/schedule/productivity",
    tag = SCHEDULE_TAG,
    params(ListProductivityParams),
    responses(
        (status = 200, description = "Productivity entries", body = Vec<ProductivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_productivity(
    State(state): State<AppState>,
    Query(params): Query<ListProductivityParams>,
) -> Result<impl IntoResponse, Error> {
    let entries = ProductivityService::new(&state.db)
        .list(params.cycle_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    post,
    path = "/api/schedule/productivity",
    tag = SCHEDULE_TAG,
    request_body = SaveProductivityDto,
    responses(
        (status = 201, description = "Entry created", body = ProductivityDto),
        (status = 400, description = "Entity code missing", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_productivity(
    State(state): State<AppState>,
    session: Session,
    Json(entry): Json<SaveProductivityDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let entry = ProductivityService::new(&state.db).create(entry).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    put,
    path = "/api/schedule/productivity/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Productivity entry ID")),
    request_body = SaveProductivityDto,
    responses(
        (status = 200, description = "Entry updated", body = ProductivityDto),
        (status = 400, description = "Entity code missing", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Entry or schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_productivity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(entry): Json<SaveProductivityDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let entry = ProductivityService::new(&state.db)
        .update(&id, entry)
        .await?;

    Ok((StatusCode::OK, Json(entry)))
}

#[utoipa::path(
    delete,
    path = "/api/schedule/productivity/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Productivity entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Productivity entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_productivity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    ProductivityService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
