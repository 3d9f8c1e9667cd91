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
        schedule::{AssignmentDto, AssignmentHistoryDto, SaveAssignmentDto},
    },
    server::{
        controller::{schedule::SCHEDULE_TAG, util::access::require_supervisor},
        error::Error,
        model::app::AppState,
        service::schedule::assignment::AssignmentService,
    },
};

#[derive(Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListAssignmentsParams {
    /// Only list assignments of this cycle
    pub cycle_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/schedule/assignments",
    tag = SCHEDULE_TAG,
    params(ListAssignmentsParams),
    responses(
        (status = 200, description = "Assignments", body = Vec<AssignmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_assignments(
    State(state): State<AppState>,
    Query(params): Query<ListAssignmentsParams>,
) -> Result<impl IntoResponse, Error> {
    let assignments = AssignmentService::new(&state.db)
        .list(params.cycle_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(assignments)))
}

/// Write a grid cell
///
/// Replaces the assignment of the (cycle, employee, column) cell or creates it. The value type
/// and entity codes are derived from the text.
#[utoipa::path(
    put,
    path = "/api/schedule/assignments",
    tag = SCHEDULE_TAG,
    request_body = SaveAssignmentDto,
    responses(
        (status = 200, description = "Assignment saved", body = AssignmentDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Cycle, column or employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_assignment(
    State(state): State<AppState>,
    session: Session,
    Json(assignment): Json<SaveAssignmentDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let assignment = AssignmentService::new(&state.db).save(assignment).await?;

    Ok((StatusCode::OK, Json(assignment)))
}

#[utoipa::path(
    delete,
    path = "/api/schedule/assignments/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Assignment ID")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    AssignmentService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get which entities each employee has covered and who covered each entity
#[utoipa::path(
    get,
    path = "/api/schedule/history",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "Coverage history across all cycles", body = AssignmentHistoryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let history = AssignmentService::new(&state.db).history().await?;

    Ok((StatusCode::OK, Json(history)))
}
