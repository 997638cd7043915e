use data_form_backend::{build_router, config::Config, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    let app = build_router(AppState::new(), &config)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
