use axum::{extract::State, http::StatusCode};
use reposit::{
    model::protocol::EntityDto,
    server::{controller::entity::list_entities, model::app::AppState},
};

use super::*;

/// Expect entities ordered by name without requiring a login
#[tokio::test]
async fn lists_entities_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_protocol_tables()
        .with_entity("thr", "Texas Health Rockwall", "THR")
        .with_entity("tha", "Texas Health Allen", "THAL")
        .build()
        .await?;

    let resp = into_response(list_entities(State(test.state::<AppState>())).await);
    assert_eq!(resp.status(), StatusCode::OK);

    let entities: Vec<EntityDto> = body_json(resp).await?;
    let names: Vec<&str> = entities.iter().map(|entity| entity.name.as_str()).collect();
    assert_eq!(names, vec!["Texas Health Allen", "Texas Health Rockwall"]);

    Ok(())
}

/// Expect 500 when the tables were never created
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = into_response(list_entities(State(test.state::<AppState>())).await);
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
