use prototype_versions::{
    AppState,
    config::{AppConfig, Env},
    create_router,
};
use std::error::Error;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, installs logging, mounts every prototype version and
/// serves until the process is stopped.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = AppConfig::load()?;

    // RUST_LOG wins; otherwise debug for this crate so prefix rewrites show up.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prototype_versions=debug,tower_http=info".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    let bind_address = config.bind_address;
    let versions: Vec<String> = config.versions.iter().map(|v| v.to_string()).collect();
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(%bind_address, ?versions, "HTTP server bound successfully");

    axum::serve(listener, app).await?;
    Ok(())
}
