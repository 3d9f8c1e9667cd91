use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::protocol::{ResolvedExamDto, SaveEntityDto, SeedDto},
    server::{
        controller::{
            entity::create_entity,
            exam::{get_exam, GetExamParams},
            seed::seed,
        },
        model::app::AppState,
    },
};
use reposit_test_utils::prelude::*;

use crate::util::{body_json, into_response, login_admin};

async fn resolved(test: &TestSetup, entity: &str) -> ResolvedExamDto {
    let resp = into_response(
        get_exam(
            State(test.state::<AppState>()),
            test.session.clone(),
            Path("cta-abdomen".to_string()),
            Query(GetExamParams {
                entity: Some(entity.to_string()),
                variant: None,
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    body_json(resp).await.unwrap()
}

/// Seeding, then viewing the CTA protocol at Plano and at another entity.
///
/// Plano sees its technique override labelled "Texas Health Plano Specific"; every other
/// entity sees the default technique. Seeding twice leaves the same result.
#[tokio::test]
async fn seeded_protocol_resolves_per_entity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_protocol_tables().build().await?;

    for _ in 0..2 {
        let resp = into_response(seed(State(test.state::<AppState>())).await);
        assert_eq!(resp.status(), StatusCode::OK);

        let result: SeedDto = body_json(resp).await?;
        assert!(result.success);
    }

    login_admin(&test.session).await;
    let result = create_entity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(SaveEntityDto {
            id: Some("thr".to_string()),
            name: "Texas Health Rockwall".to_string(),
            code: "THR".to_string(),
            logo_url: None,
        }),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::CREATED);

    let plano = resolved(&test, "thp").await;
    let technique = plano
        .sections
        .iter()
        .find(|section| section.id == "technique")
        .unwrap();
    assert!(technique.is_overridden);
    assert!(technique.content.contains("125mL Isovue 370"));
    assert_eq!(
        technique.override_label.as_deref(),
        Some("Texas Health Plano Specific")
    );

    let rockwall = resolved(&test, "thr").await;
    let technique = rockwall
        .sections
        .iter()
        .find(|section| section.id == "technique")
        .unwrap();
    assert!(!technique.is_overridden);
    assert!(technique.content.contains("100mL Omnipaque 350"));
    assert!(technique.override_label.is_none());

    Ok(())
}
