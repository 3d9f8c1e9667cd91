//! Clinical review scheduler endpoints.
//!
//! Reads are public. Writes require supervisor mode or an admin login.

pub mod assignment;
pub mod cycle;
pub mod employee;
pub mod mode;
pub mod productivity;
pub mod time_off;

pub static SCHEDULE_TAG: &str = "schedule";
