//! Server models: application state, database model aliases and typed session data.

pub mod app;
pub mod db;
pub mod session;
