use axum::http::StatusCode;
use reposit::server::{
    controller::auth::logout,
    model::session::{admin::SessionAdmin, supervisor::SessionSupervisor},
};

use super::*;

/// Expect 204 and both admin and supervisor access cleared
#[tokio::test]
async fn clears_admin_and_supervisor_access() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_admin(&test.session).await;
    enter_supervisor(&test.session).await;

    let result = logout(test.session.clone()).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    assert!(SessionAdmin::get(&test.session).await.unwrap().is_none());
    assert!(!SessionSupervisor::get(&test.session).await.unwrap());

    Ok(())
}

/// Expect 204 when nothing is stored in session
#[tokio::test]
async fn succeeds_without_session_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    Ok(())
}
