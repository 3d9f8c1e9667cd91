use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::{admin::SessionAdmin, supervisor::SessionSupervisor},
};

/// Require an admin login on the session.
///
/// # Returns
/// - `Ok(String)` - Email of the logged in admin
/// - `Err(AuthError::AdminRequired)` - No admin is logged in
pub async fn require_admin(session: &Session) -> Result<String, Error> {
    match SessionAdmin::get(session).await? {
        Some(email) => Ok(email),
        None => Err(AuthError::AdminRequired.into()),
    }
}

/// Require supervisor mode or an admin login on the session.
pub async fn require_supervisor(session: &Session) -> Result<(), Error> {
    if SessionSupervisor::get(session).await? || SessionAdmin::get(session).await?.is_some() {
        return Ok(());
    }

    Err(AuthError::SupervisorRequired.into())
}
