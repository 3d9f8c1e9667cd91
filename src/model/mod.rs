//! Request and response types shared by the HTTP controllers, services and tests.

pub mod api;
pub mod auth;
pub mod de;
pub mod protocol;
pub mod schedule;
