use kumo::config::Config;
use kumo::sources::YahooFinanceClient;
use kumo::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kumo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting Kumo server on {}:{}", config.host, config.port);
    info!(
        "Reference price {} with default tickers {} over {}",
        config.reference_price, config.dashboard.tickers, config.dashboard.period
    );

    let provider = Arc::new(YahooFinanceClient::new(
        config.yahoo_base_url.clone(),
        config.fetch_timeout,
    )?);

    let addr = format!("{}:{}", config.host, config.port);
    let app = kumo::app(AppState::new(config, provider));

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Kumo server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
