//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI path annotation, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, schedule},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` call. The OpenAPI document is
/// available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>`, the caller provides the state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes()
///     .with_state(AppState::new(db, &config))
///     .layer(session_layer());
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Reposit", description = "Reposit API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Admin and supervisor sign in"),
        (name = controller::entity::ENTITY_TAG, description = "Care entity management"),
        (name = controller::exam::EXAM_TAG, description = "Protocol exams, search and entity resolution"),
        (name = controller::staff::STAFF_TAG, description = "Staff entity selection"),
        (name = controller::seed::SEED_TAG, description = "Demonstration data"),
        (name = schedule::SCHEDULE_TAG, description = "Clinical review scheduling"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_admin))
        .routes(routes!(controller::auth::supervisor_login))
        .routes(routes!(
            controller::entity::list_entities,
            controller::entity::create_entity
        ))
        .routes(routes!(
            controller::entity::get_entity,
            controller::entity::update_entity,
            controller::entity::delete_entity
        ))
        .routes(routes!(
            controller::exam::list_exams,
            controller::exam::create_exam
        ))
        .routes(routes!(
            controller::exam::get_exam,
            controller::exam::update_exam,
            controller::exam::delete_exam
        ))
        .routes(routes!(controller::exam::get_admin_exam))
        .routes(routes!(
            controller::staff::get_staff_entity,
            controller::staff::select_staff_entity
        ))
        .routes(routes!(controller::seed::seed))
        .routes(routes!(schedule::mode::get_data_mode))
        .routes(routes!(
            schedule::cycle::list_cycles,
            schedule::cycle::create_cycle
        ))
        .routes(routes!(schedule::cycle::get_active_cycle))
        .routes(routes!(
            schedule::cycle::get_cycle,
            schedule::cycle::update_cycle,
            schedule::cycle::delete_cycle
        ))
        .routes(routes!(schedule::cycle::get_cycle_grid))
        .routes(routes!(schedule::cycle::get_cycle_warnings))
        .routes(routes!(schedule::cycle::update_column))
        .routes(routes!(schedule::cycle::move_column))
        .routes(routes!(schedule::cycle::copy_cycle))
        .routes(routes!(
            schedule::employee::list_employees,
            schedule::employee::create_employee
        ))
        .routes(routes!(
            schedule::employee::update_employee,
            schedule::employee::delete_employee
        ))
        .routes(routes!(
            schedule::assignment::list_assignments,
            schedule::assignment::save_assignment
        ))
        .routes(routes!(schedule::assignment::delete_assignment))
        .routes(routes!(schedule::assignment::get_history))
        .routes(routes!(
            schedule::time_off::list_time_off,
            schedule::time_off::create_time_off
        ))
        .routes(routes!(
            schedule::time_off::update_time_off,
            schedule::time_off::delete_time_off
        ))
        .routes(routes!(
            schedule::productivity::list_productivity,
            schedule::productivity::create_productivity
        ))
        .routes(routes!(
            schedule::productivity::update_productivity,
            schedule::productivity::delete_productivity
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
