use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bowling_api::game::GameState;
use bowling_api::service::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = router(AppState::new(GameState::new()));

    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "bowling API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
