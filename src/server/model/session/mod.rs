//! Session data models.
//!
//! Type-safe wrappers for values kept in the tower-sessions store: the logged in admin, the
//! supervisor flag for the scheduler and the staff member's selected entity.

pub mod admin;
pub mod entity;
pub mod supervisor;
