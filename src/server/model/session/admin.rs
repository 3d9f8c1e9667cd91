use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_ADMIN_KEY: &str = "reposit:auth:admin";

/// Email of the administrator logged in on this session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAdmin(pub String);

impl SessionAdmin {
    /// Insert admin email into session
    pub async fn insert(session: &Session, email: &str) -> Result<(), Error> {
        session
            .insert(SESSION_ADMIN_KEY, SessionAdmin(email.to_string()))
            .await?;

        Ok(())
    }

    /// Get admin email from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionAdmin>(SESSION_ADMIN_KEY)
            .await?
            .map(|SessionAdmin(email)| email))
    }
}
