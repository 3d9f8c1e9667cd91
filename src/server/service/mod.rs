//! Service layer for business logic.
//!
//! Services validate writes, convert between database models and DTOs, and hold the pure
//! core logic of the protocol portal (override resolution, visibility) and the scheduler
//! (classification, coverage warnings, grid building). Controllers call services; services
//! call repositories.

pub mod auth;
pub mod protocol;
pub mod schedule;
pub mod seed;
