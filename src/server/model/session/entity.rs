use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_STAFF_ENTITY_KEY: &str = "reposit:staff:entity";

/// Entity ID selected by a staff member in the protocol portal.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionStaffEntity(pub String);

impl SessionStaffEntity {
    pub async fn insert(session: &Session, entity_id: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_STAFF_ENTITY_KEY,
                SessionStaffEntity(entity_id.to_string()),
            )
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionStaffEntity>(SESSION_STAFF_ENTITY_KEY)
            .await?
            .map(|SessionStaffEntity(id)| id))
    }

    /// Clears a selection that no longer points at an existing entity.
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionStaffEntity>(SESSION_STAFF_ENTITY_KEY)
            .await?;

        Ok(())
    }
}
