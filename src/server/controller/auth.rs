use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminDto, LoginDto, SupervisorLoginDto},
    },
    server::{
        controller::util::access::require_admin,
        error::Error,
        model::{
            app::AppState,
            session::{admin::SessionAdmin, supervisor::SessionSupervisor},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in as the administrator
///
/// Stores the admin email in session, which grants access to the admin and supervisor routes.
///
/// # Responses
/// - 200 (OK): Logged in
/// - 401 (Unauthorized): Email or password do not match the configured admin account
/// - 500 (Internal Server Error): Failed to store the login in session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in as admin", body = AdminDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = AuthService::new(&state.credentials).login(&login)?;

    SessionAdmin::insert(&session, &admin.email).await?;

    tracing::info!("Admin {} logged in", admin.email);

    Ok((StatusCode::OK, Json(admin)))
}

/// Logs out by clearing the session, ending both admin and supervisor access
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the administrator logged in on this session
#[utoipa::path(
    get,
    path = "/api/auth/admin",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Admin logged in", body = AdminDto),
        (status = 401, description = "No admin logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin(session: Session) -> Result<impl IntoResponse, Error> {
    let email = require_admin(&session).await?;

    Ok((StatusCode::OK, Json(AdminDto { email })))
}

/// Enter supervisor mode of the scheduler
///
/// # Responses
/// - 204 (No Content): Supervisor mode enabled for this session
/// - 401 (Unauthorized): Incorrect supervisor password
#[utoipa::path(
    post,
    path = "/api/auth/supervisor",
    tag = AUTH_TAG,
    request_body = SupervisorLoginDto,
    responses(
        (status = 204, description = "Supervisor mode enabled"),
        (status = 401, description = "Incorrect supervisor password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn supervisor_login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<SupervisorLoginDto>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.credentials).supervisor_login(&login.password)?;

    SessionSupervisor::insert(&session).await?;

    Ok(StatusCode::NO_CONTENT)
}
