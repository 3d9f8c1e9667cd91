//! HTTP controller endpoints for the Reposit web API.
//!
//! Axum handlers for the protocol portal, the review scheduler and authentication. Handlers
//! check session access, call services and map results to JSON responses; every handler is
//! annotated with utoipa for the OpenAPI document.

pub mod auth;
pub mod entity;
pub mod exam;
pub mod schedule;
pub mod seed;
pub mod staff;
pub mod util;
