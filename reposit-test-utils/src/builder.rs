//! Declarative test builder.
//!
//! Chain table and fixture methods, then call `build()` to create the in-memory database,
//! run the queued table creations and insert the queued fixtures in order.

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_protocol_tables: bool,
    include_schedule_tables: bool,

    entities: Vec<(String, String, String)>, // (id, name, code)
    exams: Vec<(String, String, String)>,    // (id, title, modality)
    employees: Vec<(String, String)>,        // (id, name)
    cycles: Vec<(String, NaiveDate, String)>, // (id, start_date, status)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_protocol_tables: false,
            include_schedule_tables: false,
            entities: Vec::new(),
            exams: Vec::new(),
            employees: Vec::new(),
            cycles: Vec::new(),
        }
    }

    /// Add the `entities` and `exams` tables.
    pub fn with_protocol_tables(mut self) -> Self {
        self.include_protocol_tables = true;
        self
    }

    /// Add the scheduler tables.
    pub fn with_schedule_tables(mut self) -> Self {
        self.include_schedule_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reposit_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), reposit_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::CareEntity)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_entity(mut self, id: &str, name: &str, code: &str) -> Self {
        self.entities
            .push((id.to_string(), name.to_string(), code.to_string()));
        self
    }

    pub fn with_exam(mut self, id: &str, title: &str, modality: &str) -> Self {
        self.exams
            .push((id.to_string(), title.to_string(), modality.to_string()));
        self
    }

    pub fn with_employee(mut self, id: &str, name: &str) -> Self {
        self.employees.push((id.to_string(), name.to_string()));
        self
    }

    pub fn with_cycle(mut self, id: &str, start_date: NaiveDate, status: &str) -> Self {
        self.cycles
            .push((id.to_string(), start_date, status.to_string()));
        self
    }

    /// Build the test setup.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Database with the queued tables and fixtures
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut tables = Vec::new();
        if self.include_protocol_tables || self.include_schedule_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::CareEntity));
        }
        if self.include_protocol_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::Exam));
        }
        if self.include_schedule_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::Employee));
            tables.push(schema.create_table_from_entity(entity::prelude::ScheduleCycle));
            tables.push(schema.create_table_from_entity(entity::prelude::Assignment));
            tables.push(schema.create_table_from_entity(entity::prelude::TimeOff));
            tables.push(schema.create_table_from_entity(entity::prelude::Productivity));
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;
        if self.include_schedule_tables {
            setup.with_assignment_cell_index().await?;
        }

        for (id, name, code) in &self.entities {
            setup.protocol().insert_entity(id, name, code).await?;
        }

        for (id, title, modality) in &self.exams {
            setup.protocol().insert_exam(id, title, modality).await?;
        }

        for (id, name) in &self.employees {
            setup.schedule().insert_employee(id, name).await?;
        }

        for (id, start_date, status) in &self.cycles {
            setup.schedule().insert_cycle(id, *start_date, status).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
