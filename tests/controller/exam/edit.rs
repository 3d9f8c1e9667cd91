use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reposit::{
    model::protocol::ExamDto,
    server::{
        controller::exam::{create_exam, delete_exam, get_admin_exam, update_exam},
        model::app::AppState,
    },
};

use super::*;

/// Expect 401 from every editing endpoint without an admin login
#[tokio::test]
async fn requires_admin() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_exam("cta", "CTA", &[])),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    let result = get_admin_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("cta".to_string()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    let result = delete_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("cta".to_string()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 when the exam is enabled for an entity that does not exist
#[tokio::test]
async fn rejects_unknown_enabled_entity() -> Result<(), TestError> {
    let test = setup().await?;
    login_admin(&test.session).await;

    let result = create_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_exam("cta", "CTA", &["missing"])),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect an update to replace the document and keep the version
#[tokio::test]
async fn updates_exam_document() -> Result<(), TestError> {
    let test = setup().await?;
    login_admin(&test.session).await;

    let resp = into_response(
        create_exam(
            State(test.state::<AppState>()),
            test.session.clone(),
            Json(save_exam("cta", "CTA", &[])),
        )
        .await,
    );
    let created: ExamDto = body_json(resp).await?;

    let resp = into_response(
        update_exam(
            State(test.state::<AppState>()),
            test.session.clone(),
            Path("cta".to_string()),
            Json(save_exam("cta", "CTA Abdomen", &["thp"])),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = into_response(
        get_admin_exam(
            State(test.state::<AppState>()),
            test.session.clone(),
            Path("cta".to_string()),
        )
        .await,
    );
    let stored: ExamDto = body_json(resp).await?;
    assert_eq!(stored.title, "CTA Abdomen");
    assert_eq!(stored.enabled_entities, vec!["thp".to_string()]);
    assert_eq!(stored.version, created.version);

    Ok(())
}

/// Expect 204 on delete, then 404 for the removed exam
#[tokio::test]
async fn deletes_exam() -> Result<(), TestError> {
    let test = setup().await?;
    login_admin(&test.session).await;

    let result = create_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(save_exam("cta", "CTA", &[])),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::CREATED);

    let result = delete_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("cta".to_string()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let result = get_admin_exam(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path("cta".to_string()),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
