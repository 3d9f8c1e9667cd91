//! Utility functions for controller request handling.
//!
//! Session guards for admin and supervisor routes, and resolution of the entity a staff
//! member is viewing the portal as.

pub mod access;
pub mod current_entity;
