pub use sea_orm_migration::prelude::*;

mod m20250519_000001_entities;
mod m20250519_000002_exams;
mod m20250519_000003_employees;
mod m20250519_000004_schedule_cycles;
mod m20250519_000005_assignments;
mod m20250519_000006_time_off;
mod m20250519_000007_productivity;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250519_000001_entities::Migration),
            Box::new(m20250519_000002_exams::Migration),
            Box::new(m20250519_000003_employees::Migration),
            Box::new(m20250519_000004_schedule_cycles::Migration),
            Box::new(m20250519_000005_assignments::Migration),
            Box::new(m20250519_000006_time_off::Migration),
            Box::new(m20250519_000007_productivity::Migration),
        ]
    }
}
