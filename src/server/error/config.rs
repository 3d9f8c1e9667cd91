use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration read from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} must be set")]
    MissingEnvVar(String),
    /// A variable could not be parsed, e.g. a malformed `BIND_ADDRESS`.
    #[error("{var} is invalid: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
