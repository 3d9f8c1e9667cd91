//! Small helpers shared by repositories and services: id and slug generation, and decoding
//! of the JSON document columns.

pub mod id;
pub mod json;
