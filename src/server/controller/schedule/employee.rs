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
        schedule::{EmployeeDto, SaveEmployeeDto},
    },
    server::{
        controller::{schedule::SCHEDULE_TAG, util::access::require_supervisor},
        error::Error,
        model::app::AppState,
        service::schedule::employee::EmployeeService,
    },
};

/// List all employees ordered by name, inactive employees included
#[utoipa::path(
    get,
    path = "/api/schedule/employees",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let employees = EmployeeService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(employees)))
}

#[utoipa::path(
    post,
    path = "/api/schedule/employees",
    tag = SCHEDULE_TAG,
    request_body = SaveEmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    session: Session,
    Json(employee): Json<SaveEmployeeDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let employee = EmployeeService::new(&state.db).create(employee).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

#[utoipa::path(
    put,
    path = "/api/schedule/employees/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Employee ID")),
    request_body = SaveEmployeeDto,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(employee): Json<SaveEmployeeDto>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    let employee = EmployeeService::new(&state.db)
        .update(&id, employee)
        .await?;

    Ok((StatusCode::OK, Json(employee)))
}

/// Delete an employee, their assignments and time off are kept
#[utoipa::path(
    delete,
    path = "/api/schedule/employees/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Supervisor access required", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_supervisor(&session).await?;

    EmployeeService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
