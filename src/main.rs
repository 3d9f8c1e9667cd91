use reposit::{
    model::schedule::DataMode,
    server::{config::Config, error::Error, model::app::AppState, router, startup},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;

    if config.data_mode() == DataMode::Local {
        tracing::info!("DATABASE_URL not set, running with local demonstration data");
        startup::seed_local_data(&db).await?;
    }

    let app = router::routes()
        .with_state(AppState::new(db, &config))
        .layer(startup::session_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
