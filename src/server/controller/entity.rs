use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        protocol::{EntityDto, SaveEntityDto},
    },
    server::{
        controller::util::access::require_admin, error::Error, model::app::AppState,
        service::protocol::entity::EntityService,
    },
};

pub static ENTITY_TAG: &str = "entity";

/// List all entities ordered by name
#[utoipa::path(
    get,
    path = "/api/entities",
    tag = ENTITY_TAG,
    responses(
        (status = 200, description = "All entities", body = Vec<EntityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_entities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let entities = EntityService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(entities)))
}

#[utoipa::path(
    get,
    path = "/api/entities/{id}",
    tag = ENTITY_TAG,
    params(("id" = String, Path, description = "Entity ID")),
    responses(
        (status = 200, description = "The entity", body = EntityDto),
        (status = 404, description = "Entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let entity = EntityService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(entity)))
}

/// Create an entity, requires an admin login
#[utoipa::path(
    post,
    path = "/api/entities",
    tag = ENTITY_TAG,
    request_body = SaveEntityDto,
    responses(
        (status = 201, description = "Entity created", body = EntityDto),
        (status = 400, description = "Name or code missing", body = ErrorDto),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_entity(
    State(state): State<AppState>,
    session: Session,
    Json(entity): Json<SaveEntityDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let entity = EntityService::new(&state.db).create(entity).await?;

    Ok((StatusCode::CREATED, Json(entity)))
}

/// Replace an entity, requires an admin login
#[utoipa::path(
    put,
    path = "/api/entities/{id}",
    tag = ENTITY_TAG,
    params(("id" = String, Path, description = "Entity ID")),
    request_body = SaveEntityDto,
    responses(
        (status = 200, description = "Entity updated", body = EntityDto),
        (status = 400, description = "Name or code missing", body = ErrorDto),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 404, description = "Entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_entity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(entity): Json<SaveEntityDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let entity = EntityService::new(&state.db).update(&id, entity).await?;

    Ok((StatusCode::OK, Json(entity)))
}

/// Delete an entity, requires an admin login
///
/// Exams naming the entity in overrides or enabled entities are left as they are.
#[utoipa::path(
    delete,
    path = "/api/entities/{id}",
    tag = ENTITY_TAG,
    params(("id" = String, Path, description = "Entity ID")),
    responses(
        (status = 204, description = "Entity deleted"),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 404, description = "Entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    EntityService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
