use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Errors raised by the clinical review scheduler.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Schedule cycle {0:?} not found")]
    CycleNotFound(String),
    #[error("No schedule cycles exist yet")]
    NoCycles,
    #[error("Column {key:?} not found in schedule cycle {cycle_id:?}")]
    ColumnNotFound { cycle_id: String, key: String },
    #[error("Employee {0:?} not found")]
    EmployeeNotFound(String),
    #[error("Time off entry {0:?} not found")]
    TimeOffNotFound(String),
    #[error("Productivity entry {0:?} not found")]
    ProductivityNotFound(String),
    #[error("Assignment {0:?} not found")]
    AssignmentNotFound(String),
    #[error("{field} must not be empty")]
    Required { field: &'static str },
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },
    #[error("Stored value {value:?} is not a valid {kind}")]
    InvalidStoredValue { kind: &'static str, value: String },
}

impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        match self {
            Self::CycleNotFound(_) | Self::NoCycles => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Schedule cycle not found.")
            }
            Self::ColumnNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, "Column not found.")
            }
            Self::EmployeeNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Employee not found.")
            }
            Self::TimeOffNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Time off entry not found.")
            }
            Self::ProductivityNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Productivity entry not found.")
            }
            Self::AssignmentNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Assignment not found.")
            }
            Self::Required { field } => {
                error_response(StatusCode::BAD_REQUEST, format!("{} is required.", field))
            }
            Self::InvalidDateRange { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Start date must not be after end date.",
            ),
            Self::InvalidStoredValue { .. } => InternalServerError(self).into_response(),
        }
    }
}
