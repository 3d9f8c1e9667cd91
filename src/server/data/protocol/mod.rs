pub mod entity;
pub mod exam;
