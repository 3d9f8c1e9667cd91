use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        protocol::{EntityDto, SelectEntityDto},
    },
    server::{
        controller::util::current_entity::current_entity,
        error::{content::ContentError, Error},
        model::{app::AppState, session::entity::SessionStaffEntity},
        service::protocol::entity::EntityService,
    },
};

pub static STAFF_TAG: &str = "staff";

/// Get the entity staff content is currently resolved for
///
/// This is the entity selected in session, or the first entity by name when nothing valid is
/// selected.
#[utoipa::path(
    get,
    path = "/api/staff/entity",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "The current entity", body = EntityDto),
        (status = 404, description = "No entities exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_entity(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(entity) = current_entity(&state, &session, None).await? else {
        return Err(ContentError::NoEntities.into());
    };

    Ok((StatusCode::OK, Json(entity)))
}

/// Select the entity staff content is resolved for
#[utoipa::path(
    put,
    path = "/api/staff/entity",
    tag = STAFF_TAG,
    request_body = SelectEntityDto,
    responses(
        (status = 200, description = "Entity selected", body = EntityDto),
        (status = 404, description = "Entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select_staff_entity(
    State(state): State<AppState>,
    session: Session,
    Json(selection): Json<SelectEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let entity = EntityService::new(&state.db)
        .get(&selection.entity_id)
        .await?;

    SessionStaffEntity::insert(&session, &entity.id).await?;

    Ok((StatusCode::OK, Json(entity)))
}
