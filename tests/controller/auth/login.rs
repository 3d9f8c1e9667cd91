use axum::{extract::State, http::StatusCode, Json};
use reposit::{
    model::auth::{AdminDto, LoginDto},
    server::{
        controller::auth::{get_admin, login},
        model::{app::AppState, session::admin::SessionAdmin},
    },
};

use super::*;

fn credentials(email: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Expect 200 and the admin stored in session with the configured credentials
#[tokio::test]
async fn logs_in_with_configured_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.state::<AppState>()),
        test.session.clone(),
        credentials(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let admin: AdminDto = body_json(resp).await?;
    assert_eq!(admin.email, TEST_ADMIN_EMAIL);

    let stored = SessionAdmin::get(&test.session).await.unwrap();
    assert_eq!(stored.as_deref(), Some(TEST_ADMIN_EMAIL));

    Ok(())
}

/// Expect the email to match regardless of case and surrounding whitespace
#[tokio::test]
async fn email_match_ignores_case() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let email = format!("  {}  ", TEST_ADMIN_EMAIL.to_uppercase());
    let result = login(
        State(test.state::<AppState>()),
        test.session.clone(),
        credentials(&email, TEST_ADMIN_PASSWORD),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 and nothing stored in session with a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.state::<AppState>()),
        test.session.clone(),
        credentials(TEST_ADMIN_EMAIL, "not the password"),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    let stored = SessionAdmin::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

/// Expect 401 from the admin endpoint until someone logs in
#[tokio::test]
async fn get_admin_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_admin(test.session.clone()).await;
    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    login_admin(&test.session).await;

    let resp = into_response(get_admin(test.session.clone()).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let admin: AdminDto = body_json(resp).await?;
    assert_eq!(admin.email, TEST_ADMIN_EMAIL);

    Ok(())
}
