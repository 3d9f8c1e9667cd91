pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, TEST_SUPERVISOR_PASSWORD},
        fixtures::factory,
        test_setup_with_protocol_tables, test_setup_with_schedule_tables, test_setup_with_tables,
        TestBuilder, TestError, TestSetup,
    };
}
