//! Data access layer repositories.
//!
//! One repository per table, grouped by the application that owns the data. Repositories are
//! generic over [`sea_orm::ConnectionTrait`] so they run the same on a pooled connection or
//! inside a transaction.

pub mod protocol;
pub mod schedule;
