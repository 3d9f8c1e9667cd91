use std::sync::Arc;

use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, TEST_SUPERVISOR_PASSWORD},
    error::TestError,
};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert the test state into any type that can be constructed from
    /// `(db, admin_email, admin_password, supervisor_password)`.
    ///
    /// This allows conversion to the server's `AppState` without a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String, String, String)>,
    {
        T::from((
            self.state.db.clone(),
            TEST_ADMIN_EMAIL.to_string(),
            TEST_ADMIN_PASSWORD.to_string(),
            TEST_SUPERVISOR_PASSWORD.to_string(),
        ))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the unique (cycle, employee, column) index the assignments migration adds,
    /// which assignment upserts use as their conflict target.
    pub async fn with_assignment_cell_index(&self) -> Result<(), TestError> {
        let stmt = Index::create()
            .name("idx-assignments-cycle_employee_column")
            .table(entity::prelude::Assignment)
            .col(entity::assignment::Column::ScheduleCycleId)
            .col(entity::assignment::Column::EmployeeId)
            .col(entity::assignment::Column::ColumnKey)
            .unique()
            .to_owned();
        self.state.db.execute(&stmt).await?;

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates the `entities` and `exams` tables.
#[macro_export]
macro_rules! test_setup_with_protocol_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::CareEntity),
                schema.create_table_from_entity(entity::prelude::Exam),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates the scheduler tables along with `entities`, whose codes the scheduler reads.
#[macro_export]
macro_rules! test_setup_with_schedule_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::CareEntity),
                schema.create_table_from_entity(entity::prelude::Employee),
                schema.create_table_from_entity(entity::prelude::ScheduleCycle),
                schema.create_table_from_entity(entity::prelude::Assignment),
                schema.create_table_from_entity(entity::prelude::TimeOff),
                schema.create_table_from_entity(entity::prelude::Productivity),
            ];
            setup.with_tables(stmts).await?;
            setup.with_assignment_cell_index().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
