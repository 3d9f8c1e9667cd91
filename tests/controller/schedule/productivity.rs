use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::schedule::{ProductivityDto, SaveProductivityDto},
    server::{
        controller::schedule::productivity::{
            create_productivity, list_productivity, ListProductivityParams,
        },
        model::app::AppState,
    },
};

use super::*;

fn save_entry(cycle_id: &str, entity_code: &str) -> Json<SaveProductivityDto> {
    Json(SaveProductivityDto {
        id: None,
        schedule_cycle_id: cycle_id.to_string(),
        entity_code: entity_code.to_string(),
        dar_count: 12,
        incoming_count: 4,
        cpoe_count: None,
    })
}

/// Expect the entity code upper cased and the entry listed for its cycle only
#[tokio::test]
async fn creates_and_filters_by_cycle() -> Result<(), TestError> {
    let mut test = setup().await?;
    test.schedule()
        .insert_cycle("other", date(7, 1), "draft")
        .await?;
    enter_supervisor(&test.session).await;

    let resp = into_response(
        create_productivity(
            State(test.state::<AppState>()),
            test.session.clone(),
            save_entry("cycle", "thp"),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ProductivityDto = body_json(resp).await?;
    assert_eq!(created.entity_code, "THP");

    let list = |cycle_id: &str| {
        list_productivity(
            State(test.state::<AppState>()),
            Query(ListProductivityParams {
                cycle_id: Some(cycle_id.to_string()),
            }),
        )
    };

    let entries: Vec<ProductivityDto> = body_json(into_response(list("cycle").await)).await?;
    assert_eq!(entries.len(), 1);

    let entries: Vec<ProductivityDto> = body_json(into_response(list("other").await)).await?;
    assert!(entries.is_empty());

    Ok(())
}

/// Expect 404 for a cycle that does not exist
#[tokio::test]
async fn unknown_cycle_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    enter_supervisor(&test.session).await;

    let result = create_productivity(
        State(test.state::<AppState>()),
        test.session.clone(),
        save_entry("missing", "THP"),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
