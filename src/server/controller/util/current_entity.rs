use tower_sessions::Session;

use crate::{
    model::protocol::EntityDto,
    server::{
        error::Error,
        model::{app::AppState, session::entity::SessionStaffEntity},
        service::protocol::entity::EntityService,
    },
};

/// Resolve the entity a staff request is made for.
///
/// The `entity` query parameter wins over the selection stored in session. A stored selection
/// naming a deleted entity is cleared and the first entity by name is used instead.
///
/// # Returns
/// - `Ok(Some(EntityDto))` - The entity content is resolved for
/// - `Ok(None)` - No entities exist
/// - `Err(ContentError::EntityNotFound)` - The requested entity does not exist
pub async fn current_entity(
    state: &AppState,
    session: &Session,
    requested: Option<&str>,
) -> Result<Option<EntityDto>, Error> {
    let requested = requested.map(str::trim).filter(|id| !id.is_empty());
    let selected = SessionStaffEntity::get(session).await?;

    let entity = EntityService::new(&state.db)
        .current(requested, selected.as_deref())
        .await?;

    if let (None, Some(selected)) = (requested, selected.as_deref()) {
        let resolved_id = entity.as_ref().map(|entity| entity.id.as_str());
        if resolved_id != Some(selected) {
            tracing::debug!("Cleared stale staff entity selection {}", selected);

            SessionStaffEntity::remove(session).await?;
        }
    }

    Ok(entity)
}
