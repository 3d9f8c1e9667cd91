//! Error types for the Reposit server.
//!
//! Each domain (authentication, configuration, protocol content, scheduling) has its own
//! `thiserror` enum. They are aggregated into [`Error`], which implements `IntoResponse` so
//! controllers can return `Result<impl IntoResponse, Error>` and propagate with `?`.

pub mod auth;
pub mod config;
pub mod content;
pub mod schedule;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, content::ContentError, schedule::ScheduleError,
    },
};

/// Main error type for the Reposit server.
///
/// Domain errors carry their own HTTP mapping; library errors (database, session, JSON
/// document decoding) are treated as internal errors and rendered as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing admin or supervisor session).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Protocol portal error (missing exam or entity, invalid exam document).
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Scheduler error (missing cycle or column, invalid cycle dates).
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
    /// Internal error indicating a bug in Reposit's code.
    #[error("Internal error with Reposit's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// A stored JSON document column could not be encoded or decoded.
    #[error(transparent)]
    DocumentError(#[from] serde_json::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::ScheduleError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details are not
/// exposed to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
