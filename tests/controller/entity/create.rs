use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::protocol::EntityDto,
    server::{
        controller::entity::{create_entity, update_entity},
        model::app::AppState,
    },
};

use super::*;

/// Expect 401 without an admin login
#[tokio::test]
async fn requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_protocol_tables().build().await?;

    let result = create_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_entity("Texas Health Plano", "THP")),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 201 with a generated ID and an upper case code
#[tokio::test]
async fn creates_entity_as_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_protocol_tables().build().await?;
    login_admin(&test.session).await;

    let result = create_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_entity(" Texas Health Plano ", "thp")),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);

    let entity: EntityDto = body_json(resp).await?;
    assert!(!entity.id.is_empty());
    assert_eq!(entity.name, "Texas Health Plano");
    assert_eq!(entity.code, "THP");

    Ok(())
}

/// Expect 400 when the name is blank
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_protocol_tables().build().await?;
    login_admin(&test.session).await;

    let result = create_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_entity("   ", "THP")),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when updating an entity that does not exist
#[tokio::test]
async fn update_missing_entity_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_protocol_tables().build().await?;
    login_admin(&test.session).await;

    let result = update_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("missing".to_string()),
        Json(save_entity("Texas Health Plano", "THP")),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
