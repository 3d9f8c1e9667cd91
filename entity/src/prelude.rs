pub use super::assignment::Entity as Assignment;
pub use super::care_entity::Entity as CareEntity;
pub use super::employee::Entity as Employee;
pub use super::exam::Entity as Exam;
pub use super::productivity::Entity as Productivity;
pub use super::schedule_cycle::Entity as ScheduleCycle;
pub use super::time_off::Entity as TimeOff;
