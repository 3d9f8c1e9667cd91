use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::protocol::ExamSummaryDto,
    server::{
        controller::exam::{create_exam, list_exams, ListExamsParams},
        model::app::AppState,
    },
};

use super::*;

async fn list(test: &TestSetup, q: Option<&str>, entity: Option<&str>) -> Vec<String> {
    let result = list_exams(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(ListExamsParams {
            q: q.map(str::to_string),
            entity: entity.map(str::to_string),
        }),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);

    let exams: Vec<ExamSummaryDto> = body_json(resp).await.unwrap();
    exams.into_iter().map(|exam| exam.id).collect()
}

async fn insert_exams(test: &TestSetup) {
    login_admin(&test.session).await;
    for exam in [
        save_exam("cta", "CTA Abdomen and Pelvis", &[]),
        save_exam("mri-brain", "MRI Brain", &["thr"]),
    ] {
        let result = create_exam(
            State(test.state::<AppState>()),
            test.session.clone(),
            Json(exam),
        )
        .await;
        assert_eq!(into_response(result).status(), StatusCode::CREATED);
    }
}

/// Expect exams restricted to other entities to be left out
#[tokio::test]
async fn hides_exams_restricted_to_other_entities() -> Result<(), TestError> {
    let test = setup().await?;
    insert_exams(&test).await;

    assert_eq!(list(&test, None, Some("thp")).await, vec!["cta"]);
    assert_eq!(list(&test, None, Some("thr")).await, vec!["cta", "mri-brain"]);

    Ok(())
}

/// Expect the search to match titles and CPT codes regardless of case
#[tokio::test]
async fn searches_title_and_codes() -> Result<(), TestError> {
    let test = setup().await?;
    insert_exams(&test).await;

    assert_eq!(list(&test, Some("cta abd"), Some("thr")).await, vec!["cta"]);
    assert_eq!(list(&test, Some("74174"), Some("thr")).await.len(), 2);
    assert!(list(&test, Some("knee"), Some("thr")).await.is_empty());

    Ok(())
}

/// Expect 404 when the requested entity does not exist
#[tokio::test]
async fn unknown_entity_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let result = list_exams(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(ListExamsParams {
            q: None,
            entity: Some("missing".to_string()),
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
