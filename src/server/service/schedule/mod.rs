//! Clinical review scheduler.
//!
//! Pure grid logic lives in [`classify`], [`columns`], [`coverage`] and [`grid`]; the other
//! modules are database-backed services over them.

pub mod assignment;
pub mod classify;
pub mod columns;
pub mod coverage;
pub mod cycle;
pub mod employee;
pub mod grid;
pub mod productivity;
pub mod time_off;
