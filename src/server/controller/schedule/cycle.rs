use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{
            GridFilter, MoveColumnDto, SaveScheduleCycleDto, ScheduleCycleDto, ScheduleGridDto,
            UpdateColumnDto,
        },
    },
    server::{
        controller::{schedule::SCHEDULE_TAG, util::access::require_supervisor},
        error::Error,
        model::app::AppState,
        service::schedule::cycle::ScheduleCycleService,
    },
};

/// List all schedule cycles ordered by start date
#[utoipa::path(
    get,
    path = "/api/schedule/cycles",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All cycles", body = Vec<ScheduleCycleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cycles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cycles = ScheduleCycleService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(cycles)))
}

/// Get the cycle shown by default
///
/// The most recently effective published cycle, or the earliest cycle when none is published.
#[utoipa::path(
    get,
    path = "/api/schedule/cycles/active",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "The active cycle", body = ScheduleCycleDto),
        (status = 404, description = "No cycles exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_cycle(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cycle = ScheduleCycleService::new(&state.db).active().await?;

    Ok((StatusCode::OK, Json(cycle)))
}

#[utoipa::path(
    get,
    path = "/api/schedule/cycles/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    responses(
        (status = 200, description = "The cycle", body = ScheduleCycleDto),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let cycle = ScheduleCycleService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(cycle)))
}

/// Get the grid of a cycle
///
/// Columns can be narrowed to DAR, incoming or CPOE, rows to employees whose name contains
/// `person`, and cells containing `highlight` are flagged.
#[utoipa::path(
    get,
    path = "/api/schedule/cycles/{id}/grid",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Cycle ID"), GridFilter),
    responses(
        (status = 200, description = "The cycle grid", body = ScheduleGridDto),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycle_grid(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(filter): Query<GridFilter>,
) -> Result<impl IntoResponse, Error> {
    let grid = ScheduleCycleService::new(&state.db)
        .grid(&id, &filter)
        .await?;

    Ok((StatusCode::OK, Json(grid)))
}

/// Get the coverage warnings of a cycle
///
/// One message for each of CPOE, 3P email primary and float that nobody covers yet.
#[utoipa::path(
    get,
    path = "/api/schedule/cycles/{id}/warnings",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    responses(
        (status = 200, description = "Coverage warnings in fixed order", body = Vec<String>),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycle_warnings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let warnings = ScheduleCycleService::new(&state.db).warnings(&id).await?;

    Ok((StatusCode::OK, Json(warnings)))
}

/// Create a cycle, a cycle without columns gets the default column set
#[utoipa::path(
    post,
    path = "/api/schedule/cycles",
    tag = SCHEDULE_TAG,
    request_body = SaveScheduleCycleDto,
    responses(
        (status = 201, description = "Cycle created", body = ScheduleCycleDto),
        (status = 400, description = "Title missing or dates reversed", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cycle(
    State(state): State<AppState>,
    session: Session,
    Json(cycle): Json<SaveScheduleCycleDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let cycle = ScheduleCycleService::new(&state.db).create(cycle).await?;

    Ok((StatusCode::CREATED, Json(cycle)))
}

#[utoipa::path(
    put,
    path = "/api/schedule/cycles/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    request_body = SaveScheduleCycleDto,
    responses(
        (status = 200, description = "Cycle updated", body = ScheduleCycleDto),
        (status = 400, description = "Title missing or dates reversed", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cycle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(cycle): Json<SaveScheduleCycleDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let cycle = ScheduleCycleService::new(&state.db)
        .update(&id, cycle)
        .await?;

    Ok((StatusCode::OK, Json(cycle)))
}

#[utoipa::path(
    delete,
    path = "/api/schedule/cycles/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    responses(
        (status = 204, description = "Cycle deleted"),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cycle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    ScheduleCycleService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Relabel, retype or regroup a column of a cycle
#[utoipa::path(
    put,
    path = "/api/schedule/cycles/{id}/columns/{key}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Cycle ID"),
        ("key" = String, Path, description = "Column key")
    ),
    request_body = UpdateColumnDto,
    responses(
        (status = 200, description = "Column updated", body = ScheduleCycleDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Cycle or column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_column(
    State(state): State<AppState>,
    session: Session,
    Path((id, key)): Path<(String, String)>,
    Json(update): Json<UpdateColumnDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let cycle = ScheduleCycleService::new(&state.db)
        .update_column(&id, &key, update)
        .await?;

    Ok((StatusCode::OK, Json(cycle)))
}

/// Move a column one place up or down, moves past either end are ignored
#[utoipa::path(
    post,
    path = "/api/schedule/cycles/{id}/columns/{key}/move",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Cycle ID"),
        ("key" = String, Path, description = "Column key")
    ),
    request_body = MoveColumnDto,
    responses(
        (status = 200, description = "Column moved", body = ScheduleCycleDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Cycle or column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_column(
    State(state): State<AppState>,
    session: Session,
    Path((id, key)): Path<(String, String)>,
    Json(movement): Json<MoveColumnDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let cycle = ScheduleCycleService::new(&state.db)
        .move_column(&id, &key, movement.direction)
        .await?;

    Ok((StatusCode::OK, Json(cycle)))
}

/// Copy a cycle and its assignments as a new draft
#[utoipa::path(
    post,
    path = "/api/schedule/cycles/{id}/copy",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    responses(
        (status = 201, description = "Copy created", body = ScheduleCycleDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Schedule cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn copy_cycle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let cycle = ScheduleCycleService::new(&state.db).copy(&id).await?;

    Ok((StatusCode::CREATED, Json(cycle)))
}
