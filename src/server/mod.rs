//! Server application core modules.
//!
//! HTTP routing, session access checks, database operations and the business rules of the
//! protocol portal and the review scheduler.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
