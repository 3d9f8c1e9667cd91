use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Errors raised by the protocol portal (entities and exams).
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Exam {0:?} not found")]
    ExamNotFound(String),
    #[error("Entity {0:?} not found")]
    EntityNotFound(String),
    #[error("No entities exist yet")]
    NoEntities,
    /// A write referenced an entity id that does not exist, as an override key or in the
    /// enabled entity list.
    #[error("Unknown entity {0:?} referenced by exam")]
    UnknownEntity(String),
    #[error("{field} must not be empty")]
    Required { field: &'static str },
    #[error("Stored exam {id:?} has an invalid modality {modality:?}")]
    InvalidStoredModality { id: String, modality: String },
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            Self::ExamNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Protocol not found.")
            }
            Self::EntityNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Entity not found.")
            }
            Self::NoEntities => error_response(StatusCode::NOT_FOUND, "No entities exist yet."),
            Self::UnknownEntity(ref id) => {
                let message = format!("Unknown entity: {}", id);
                error_response(StatusCode::BAD_REQUEST, message)
            }
            Self::Required { field } => {
                error_response(StatusCode::BAD_REQUEST, format!("{} is required.", field))
            }
            Self::InvalidStoredModality { .. } => InternalServerError(self).into_response(),
        }
    }
}
