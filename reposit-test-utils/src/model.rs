//! Database model type aliases matching those of the main crate.

pub type CareEntityModel = entity::care_entity::Model;

pub type ExamModel = entity::exam::Model;

pub type EmployeeModel = entity::employee::Model;

pub type ScheduleCycleModel = entity::schedule_cycle::Model;

pub type AssignmentModel = entity::assignment::Model;

pub type TimeOffModel = entity::time_off::Model;
