//! SeaORM entity definitions for the protocol portal and review scheduler tables.

pub mod prelude;

pub mod assignment;
pub mod care_entity;
pub mod employee;
pub mod exam;
pub mod productivity;
pub mod schedule_cycle;
pub mod time_off;
