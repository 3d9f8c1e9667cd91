use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        protocol::{ExamDto, ExamSummaryDto, ResolvedExamDto, SaveExamDto},
    },
    server::{
        controller::util::{access::require_admin, current_entity::current_entity},
        error::Error,
        model::app::AppState,
        service::protocol::exam::ExamService,
    },
};

pub static EXAM_TAG: &str = "exam";

#[derive(Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListExamsParams {
    /// Search term matched against title, modality, tags and CPT codes
    pub q: Option<String>,
    /// Entity to list exams for, defaults to the entity selected in session
    pub entity: Option<String>,
}

#[derive(Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetExamParams {
    /// Entity to resolve overrides for, defaults to the entity selected in session
    pub entity: Option<String>,
    /// Variant ID or zero based index, defaults to the first variant
    pub variant: Option<String>,
}

/// List the exams visible at the current entity
///
/// Exams restricted to other entities are left out. Results are ordered by title.
#[utoipa::path(
    get,
    path = "/api/exams",
    tag = EXAM_TAG,
    params(ListExamsParams),
    responses(
        (status = 200, description = "Visible exams matching the search", body = Vec<ExamSummaryDto>),
        (status = 404, description = "Requested entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exams(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListExamsParams>,
) -> Result<impl IntoResponse, Error> {
    let entity = current_entity(&state, &session, params.entity.as_deref()).await?;

    let exams = ExamService::new(&state.db)
        .list(
            params.q.as_deref(),
            entity.as_ref().map(|entity| entity.id.as_str()),
        )
        .await?;

    Ok((StatusCode::OK, Json(exams)))
}

/// Get an exam resolved for the current entity
///
/// Sections overridden for the entity show the override content with an
/// "<entity name> Specific" label.
#[utoipa::path(
    get,
    path = "/api/exams/{id}",
    tag = EXAM_TAG,
    params(("id" = String, Path, description = "Exam ID"), GetExamParams),
    responses(
        (status = 200, description = "The resolved exam", body = ResolvedExamDto),
        (status = 404, description = "Protocol or requested entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exam(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Query(params): Query<GetExamParams>,
) -> Result<impl IntoResponse, Error> {
    let entity = current_entity(&state, &session, params.entity.as_deref()).await?;

    let exam = ExamService::new(&state.db)
        .get_resolved(&id, params.variant.as_deref(), entity.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(exam)))
}

/// Get the stored exam document for editing, requires an admin login
#[utoipa::path(
    get,
    path = "/api/admin/exams/{id}",
    tag = EXAM_TAG,
    params(("id" = String, Path, description = "Exam ID")),
    responses(
        (status = 200, description = "The exam document", body = ExamDto),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 404, description = "Protocol not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_exam(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let exam = ExamService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(exam)))
}

/// Create an exam, requires an admin login
#[utoipa::path(
    post,
    path = "/api/exams",
    tag = EXAM_TAG,
    request_body = SaveExamDto,
    responses(
        (status = 201, description = "Exam created", body = ExamDto),
        (status = 400, description = "Title missing or unknown entity referenced", body = ErrorDto),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exam(
    State(state): State<AppState>,
    session: Session,
    Json(exam): Json<SaveExamDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let exam = ExamService::new(&state.db).create(exam).await?;

    Ok((StatusCode::CREATED, Json(exam)))
}

/// Overwrite an exam, requires an admin login
///
/// The stored version is kept and not compared, the last write wins.
#[utoipa::path(
    put,
    path = "/api/exams/{id}",
    tag = EXAM_TAG,
    params(("id" = String, Path, description = "Exam ID")),
    request_body = SaveExamDto,
    responses(
        (status = 200, description = "Exam updated", body = ExamDto),
        (status = 400, description = "Title missing or unknown entity referenced", body = ErrorDto),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 404, description = "Protocol not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exam(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(exam): Json<SaveExamDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let exam = ExamService::new(&state.db).update(&id, exam).await?;

    Ok((StatusCode::OK, Json(exam)))
}

/// Delete an exam, requires an admin login
#[utoipa::path(
    delete,
    path = "/api/exams/{id}",
    tag = EXAM_TAG,
    params(("id" = String, Path, description = "Exam ID")),
    responses(
        (status = 204, description = "Exam deleted"),
        (status = 401, description = "Admin login required", body = ErrorDto),
        (status = 404, description = "Protocol not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exam(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    ExamService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
