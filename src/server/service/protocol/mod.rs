//! Protocol portal services: care entities, exam documents, override resolution and
//! visibility.

pub mod entity;
pub mod exam;
pub mod resolve;
pub mod visibility;
