use axum::{extract::State, http::StatusCode, Json};
use reposit::{
    model::protocol::{EntityDto, SelectEntityDto},
    server::{
        controller::staff::{get_staff_entity, select_staff_entity},
        model::{app::AppState, session::entity::SessionStaffEntity},
    },
};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_protocol_tables()
        .with_entity("thr", "Texas Health Rockwall", "THR")
        .with_entity("thp", "Texas Health Plano", "THP")
        .build()
        .await
}

fn select(entity_id: &str) -> Json<SelectEntityDto> {
    Json(SelectEntityDto {
        entity_id: entity_id.to_string(),
    })
}

/// Expect the first entity by name when nothing is selected
#[tokio::test]
async fn defaults_to_first_entity_by_name() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = into_response(
        get_staff_entity(State(test.state::<AppState>()), test.session.clone()).await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let entity: EntityDto = body_json(resp).await?;
    assert_eq!(entity.id, "thp");

    Ok(())
}

/// Expect the selection to be stored and returned afterwards
#[tokio::test]
async fn stores_selection() -> Result<(), TestError> {
    let test = setup().await?;

    let result = select_staff_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        select("thr"),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::OK);

    let resp = into_response(
        get_staff_entity(State(test.state::<AppState>()), test.session.clone()).await,
    );
    let entity: EntityDto = body_json(resp).await?;
    assert_eq!(entity.id, "thr");

    Ok(())
}

/// Expect 404 and the previous selection kept when selecting an unknown entity
#[tokio::test]
async fn rejects_unknown_entity() -> Result<(), TestError> {
    let test = setup().await?;
    SessionStaffEntity::insert(&test.session, "thr").await.unwrap();

    let result = select_staff_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        select("missing"),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    let selected = SessionStaffEntity::get(&test.session).await.unwrap();
    assert_eq!(selected.as_deref(), Some("thr"));

    Ok(())
}

/// Expect a selection naming a deleted entity to be cleared
#[tokio::test]
async fn clears_stale_selection() -> Result<(), TestError> {
    let test = setup().await?;
    SessionStaffEntity::insert(&test.session, "deleted").await.unwrap();

    let resp = into_response(
        get_staff_entity(State(test.state::<AppState>()), test.session.clone()).await,
    );
    let entity: EntityDto = body_json(resp).await?;
    assert_eq!(entity.id, "thp");

    let selected = SessionStaffEntity::get(&test.session).await.unwrap();
    assert!(selected.is_none());

    Ok(())
}

/// Expect 404 when no entities exist
#[tokio::test]
async fn not_found_without_entities() -> Result<(), TestError> {
    let test = TestBuilder::new().with_protocol_tables().build().await?;

    let result = get_staff_entity(State(test.state::<AppState>()), test.session.clone()).await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
