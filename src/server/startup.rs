use std::time::Duration as StdDuration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::{
    model::schedule::DataMode,
    server::{
        config::Config,
        error::Error,
        service::seed::SeedService,
    },
};

/// Connect to the database and run migrations
///
/// In local mode the database is an in-memory SQLite instance. Each SQLite memory connection
/// is its own database, so the pool is pinned to a single connection that is never recycled.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false);

    if config.data_mode() == DataMode::Local {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(StdDuration::from_secs(u32::MAX as u64))
            .max_lifetime(StdDuration::from_secs(u32::MAX as u64));
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Load the protocol and scheduler demonstration data into a local database
pub async fn seed_local_data(db: &DatabaseConnection) -> Result<(), Error> {
    let seed = SeedService::new(db);

    let result = seed.seed_protocol().await?;
    tracing::info!("{}", result.message);

    seed.seed_schedule_demo().await?;
    tracing::info!("Loaded scheduler demonstration data");

    Ok(())
}

/// Configure in-memory session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
