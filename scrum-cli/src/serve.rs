use std::sync::{Arc, Once};

use anyhow::{Context, Result};
use scrum_auth::TokenManager;
use scrum_github::{BoardClient, GitHubConfig, OauthClient};
use scrum_model::{GatewayClient, GatewayConfig};
use scrum_server::{DEFAULT_SECRET, ServerConfig, create_app};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber once, honoring `RUST_LOG`.
fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .expect("Failed to create env filter");

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    });
}

/// Assemble the server configuration from the environment.
fn config_from_env() -> Result<ServerConfig> {
    let api_key =
        std::env::var("AI_GATEWAY_API_KEY").context("AI_GATEWAY_API_KEY is not configured")?;

    let mut gateway = GatewayConfig::new(api_key);
    if let Ok(base_url) = std::env::var("AI_GATEWAY_BASE_URL") {
        gateway = gateway.with_base_url(base_url);
    }
    if let Ok(model) = std::env::var("AI_GATEWAY_MODEL") {
        gateway = gateway.with_model(model);
    }

    let github = GitHubConfig::new(
        std::env::var("GITHUB_CLIENT_ID").unwrap_or_default(),
        std::env::var("GITHUB_CLIENT_SECRET").unwrap_or_default(),
    );

    let analyzer = Arc::new(GatewayClient::new(gateway)?);
    let exchanger = Arc::new(OauthClient::new(github.clone())?);
    let board = Arc::new(BoardClient::new(github)?);

    let secret = std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
    let mut config = ServerConfig::new(analyzer, exchanger, board)
        .with_token_manager(Arc::new(TokenManager::new(secret)));

    if let (Ok(token), Ok(username)) =
        (std::env::var("GITHUB_TOKEN"), std::env::var("GITHUB_USERNAME"))
    {
        config = config.with_auto_board(token, username);
    }

    Ok(config)
}

pub async fn run_serve(port: Option<u16>) -> Result<()> {
    init_tracing();

    let port = port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(5000);

    let config = config_from_env()?;
    if config.security.allowed_origins.is_empty() {
        tracing::warn!("CORS allows all origins; configure allowed origins for production");
    }

    let app = create_app(config);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("ScrumAgent server starting on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
