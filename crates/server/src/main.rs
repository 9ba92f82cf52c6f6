use std::net::SocketAddr;
use std::path::Path;

use customer_server::app_state::AppState;
use customer_server::config::{ConfigError, ServerConfig};
use customer_server::{db, handlers, logging, seed};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let config_path = std::env::var("SERVER_CONFIG_PATH")
        .unwrap_or_else(|_| "crates/server/res/config.toml".to_string());

    let config = ServerConfig::load(Path::new(&config_path)).await?;
    logging::init_tracing(&config)?;

    tracing::info!(host = %config.http.host, port = config.http.port, "server http bind");

    let repo = db::connect(&config, Path::new(&config_path))?;

    let seed_delay = config.seed.enabled.then(|| config.seed.delay());
    seed::spawn_startup(repo.clone(), seed_delay);

    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ConfigError::Invalid(format!("invalid http bind: {e}")))?;

    let app = handlers::router(AppState::new(repo));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ConfigError::Invalid(format!("http server error: {e}")))?;

    Ok(())
}
