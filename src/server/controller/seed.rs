use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, protocol::SeedDto},
    server::{error::Error, model::app::AppState, service::seed::SeedService},
};

pub static SEED_TAG: &str = "seed";

/// Seed the protocol portal with demonstration content
///
/// Writes the Texas Health Plano entity and the CTA Abdomen and Pelvis protocol. Seeding is
/// idempotent, running it again overwrites the same records.
#[utoipa::path(
    get,
    path = "/api/seed",
    tag = SEED_TAG,
    responses(
        (status = 200, description = "Seeding complete", body = SeedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let result = SeedService::new(&state.db).seed_protocol().await?;

    Ok((StatusCode::OK, Json(result)))
}
