//! Reposit: a radiology protocol portal with per-entity overrides, and a clinical review
//! scheduler for assigning entities and queues to team members per cycle.

pub mod model;
pub mod server;
