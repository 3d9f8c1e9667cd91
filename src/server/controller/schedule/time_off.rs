use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{SaveTimeOffDto, TimeOffDto},
    },
    server::{
        controller::{schedule::SCHEDULE_TAG, util::access::require_supervisor},
        error::Error,
        model::app::AppState,
        service::schedule::time_off::TimeOffService,
    },
};

/// List all time off ordered by start date
#[utoipa::path(
    get,
    path = "/api/schedule/time-off",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All time off entries", body = Vec<TimeOffDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_time_off(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let time_off = TimeOffService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(time_off)))
}

#[utoipa::path(
    post,
    path = "/api/schedule/time-off",
    tag = SCHEDULE_TAG,
    request_body = SaveTimeOffDto,
    responses(
        (status = 201, description = "Time off created", body = TimeOffDto),
        (status = 400, description = "Dates reversed or type missing", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_time_off(
    State(state): State<AppState>,
    session: Session,
    Json(time_off): Json<SaveTimeOffDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let time_off = TimeOffService::new(&state.db).create(time_off).await?;

    Ok((StatusCode::CREATED, Json(time_off)))
}

#[utoipa::path(
    put,
    path = "/api/schedule/time-off/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Time off ID")),
    request_body = SaveTimeOffDto,
    responses(
        (status = 200, description = "Time off updated", body = TimeOffDto),
        (status = 400, description = "Dates reversed or type missing", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Time off or employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_time_off(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(time_off): Json<SaveTimeOffDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let time_off = TimeOffService::new(&state.db)
        .update(&id, time_off)
        .await?;

    Ok((StatusCode::OK, Json(time_off)))
}

#[utoipa::path(
    delete,
    path = "/api/schedule/time-off/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Time off ID")),
    responses(
        (status = 204, description = "Time off deleted"),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Time off not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_time_off(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    TimeOffService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
