//! Credentials configured on every test application state.
//!
//! Placeholder values, not real credentials.

pub static TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub static TEST_ADMIN_PASSWORD: &str = "admin_password";

pub static TEST_SUPERVISOR_PASSWORD: &str = "supervisor_password";
