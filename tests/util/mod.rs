//! Helpers shared by the integration tests.

use axum::response::{IntoResponse, Response};
use reposit::server::model::session::{admin::SessionAdmin, supervisor::SessionSupervisor};
use reposit_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

/// Reads a JSON response body.
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> Result<T, TestError> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    Ok(serde_json::from_slice(&bytes)?)
}

/// Converts a handler result into its response, whether it succeeded or not.
pub fn into_response<T: IntoResponse, E: IntoResponse>(result: Result<T, E>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn login_admin(session: &Session) {
    SessionAdmin::insert(session, TEST_ADMIN_EMAIL).await.unwrap();
}

pub async fn enter_supervisor(session: &Session) {
    SessionSupervisor::insert(session).await.unwrap();
}
