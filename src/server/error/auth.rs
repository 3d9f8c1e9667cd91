use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Admin login rejected for email {0:?}")]
    InvalidCredentials(String),
    #[error("Supervisor password rejected")]
    InvalidSupervisorPassword,
    #[error("Admin session required")]
    AdminRequired,
    #[error("Supervisor or admin session required")]
    SupervisorRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials(_) => "Invalid email or password.",
            Self::InvalidSupervisorPassword => "Incorrect supervisor password.",
            Self::AdminRequired => "Admin login required.",
            Self::SupervisorRequired => "Supervisor access required.",
        };

        error_response(StatusCode::UNAUTHORIZED, message)
    }
}
