use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::protocol::ResolvedExamDto,
    server::{
        controller::exam::{create_exam, get_exam, GetExamParams},
        model::{app::AppState, session::entity::SessionStaffEntity},
    },
};

use super::*;

async fn get(test: &TestSetup, entity: Option<&str>) -> ResolvedExamDto {
    let result = get_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("cta".to_string()),
        Query(GetExamParams {
            entity: entity.map(str::to_string),
            variant: None,
        }),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);

    body_json(resp).await.unwrap()
}

async fn insert_exam(test: &TestSetup) {
    login_admin(&test.session).await;
    let result = create_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_exam("cta", "CTA Abdomen and Pelvis", &[])),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::CREATED);
}

/// Expect the override content and label for the requested entity
#[tokio::test]
async fn resolves_override_for_requested_entity() -> Result<(), TestError> {
    let test = setup().await?;
    insert_exam(&test).await;

    let exam = get(&test, Some("thp")).await;

    assert_eq!(exam.viewing_for.as_deref(), Some("Texas Health Plano"));
    assert_eq!(exam.sections[0].content, "Plano technique");
    assert!(exam.sections[0].is_overridden);
    assert_eq!(
        exam.sections[0].override_label.as_deref(),
        Some("Texas Health Plano Specific")
    );

    Ok(())
}

/// Expect the default content for an entity without an override
#[tokio::test]
async fn resolves_default_for_other_entity() -> Result<(), TestError> {
    let test = setup().await?;
    insert_exam(&test).await;

    let exam = get(&test, Some("thr")).await;

    assert_eq!(exam.sections[0].content, "Default technique");
    assert!(!exam.sections[0].is_overridden);
    assert!(exam.sections[0].override_label.is_none());

    Ok(())
}

/// Expect the entity selected in session to be used when none is requested
#[tokio::test]
async fn uses_session_selection() -> Result<(), TestError> {
    let test = setup().await?;
    insert_exam(&test).await;
    SessionStaffEntity::insert(&test.session, "thr").await.unwrap();

    let exam = get(&test, None).await;
    assert_eq!(exam.viewing_for.as_deref(), Some("Texas Health Rockwall"));
    assert_eq!(exam.sections[0].content, "Default technique");

    Ok(())
}

/// Expect 404 for an exam that does not exist
#[tokio::test]
async fn missing_exam_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("missing".to_string()),
        Query(GetExamParams::default()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
