//! Database model type aliases.
//!
//! Shorter names for the SeaORM models of the `entity` crate.

/// A care site, shared by the protocol portal and the scheduler.
pub type CareEntityModel = entity::care_entity::Model;

/// A protocol document with JSON encoded variants, notes, codes and tags.
pub type ExamModel = entity::exam::Model;

pub type EmployeeModel = entity::employee::Model;

/// A schedule cycle with its JSON encoded column configuration.
pub type ScheduleCycleModel = entity::schedule_cycle::Model;

pub type AssignmentModel = entity::assignment::Model;

pub type TimeOffModel = entity::time_off::Model;

pub type ProductivityModel = entity::productivity::Model;
