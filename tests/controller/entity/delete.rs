use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use reposit::server::{
    controller::entity::{delete_entity, get_entity},
    model::app::AppState,
};

use super::*;

/// Expect 204 and the entity gone afterwards
#[tokio::test]
async fn deletes_entity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_protocol_tables()
        .with_entity("thp", "Texas Health Plano", "THP")
        .build()
        .await?;
    login_admin(&test.session).await;

    let result = delete_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("thp".to_string()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let result = get_entity(State(test.state::<AppState>()), Path("thp".to_string())).await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 without an admin login, the entity is kept
#[tokio::test]
async fn requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_protocol_tables()
        .with_entity("thp", "Texas Health Plano", "THP")
        .build()
        .await?;

    let result = delete_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("thp".to_string()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    let result = get_entity(State(test.state::<AppState>()), Path("thp".to_string())).await;
    assert_eq!(into_response(result).status(), StatusCode::OK);

    Ok(())
}
