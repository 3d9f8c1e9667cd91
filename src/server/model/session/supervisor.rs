use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_SUPERVISOR_KEY: &str = "reposit:auth:supervisor";

/// Set once the supervisor password has been entered on this session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionSupervisor(pub bool);

impl SessionSupervisor {
    pub async fn insert(session: &Session) -> Result<(), Error> {
        session
            .insert(SESSION_SUPERVISOR_KEY, SessionSupervisor(true))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<bool, Error> {
        Ok(session
            .get::<SessionSupervisor>(SESSION_SUPERVISOR_KEY)
            .await?
            .map(|SessionSupervisor(enabled)| enabled)
            .unwrap_or(false))
    }
}
