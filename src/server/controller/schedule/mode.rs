use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::schedule::DataModeDto,
    server::{controller::schedule::SCHEDULE_TAG, error::Error, model::app::AppState},
};

/// Get whether the scheduler runs against the configured database or local demo data
#[utoipa::path(
    get,
    path = "/api/schedule/mode",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "The data mode", body = DataModeDto)
    ),
)]
pub async fn get_data_mode(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(DataModeDto { mode: state.mode })))
}
