use sea_orm::DatabaseConnection;

use crate::{model::schedule::DataMode, server::config::Config};

/// Login credentials configured through the environment.
#[derive(Clone)]
pub struct Credentials {
    pub admin_email: String,
    pub admin_password: String,
    pub supervisor_password: String,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub credentials: Credentials,
    pub mode: DataMode,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            credentials: Credentials {
                admin_email: config.admin_email.clone(),
                admin_password: config.admin_password.clone(),
                supervisor_password: config.supervisor_password.clone(),
            },
            mode: config.data_mode(),
        }
    }
}

/// Builds state from `(db, admin_email, admin_password, supervisor_password)`, used by the
/// test utilities which cannot depend on this crate.
impl From<(DatabaseConnection, String, String, String)> for AppState {
    fn from(
        (db, admin_email, admin_password, supervisor_password): (
            DatabaseConnection,
            String,
            String,
            String,
        ),
    ) -> Self {
        Self {
            db,
            credentials: Credentials {
                admin_email,
                admin_password,
                supervisor_password,
            },
            mode: DataMode::Database,
        }
    }
}
