//! Test fixture modules.
//!
//! - `factory` - in-memory models with standard test values
//! - `protocol` - entity and exam records
//! - `schedule` - employee, cycle, assignment and time off records

pub mod factory;
pub mod protocol;
pub mod schedule;
