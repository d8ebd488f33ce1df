use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vitalwatch_chat::chain::ProviderChain;
use vitalwatch_server::config::ServerConfig;
use vitalwatch_server::rate_limit::spawn_pruner;
use vitalwatch_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env();
    let chat = ProviderChain::from_config(&config.chat);
    if chat.is_empty() {
        tracing::warn!("no AI provider key configured; /api/chat will answer 500");
    }

    let logo = match &config.logo_path {
        Some(path) => match tokio::fs::read(path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read logo, using text watermark");
                None
            }
        },
        None => None,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let root = config.root.clone();

    let mut state = AppState::new(config, chat);
    if let Some(logo) = logo {
        state = state.with_logo(logo);
    }
    spawn_pruner(Arc::clone(&state.rate_limiter));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, root = %root.display(), "VitalWatch server listening");

    axum::serve(
        listener,
        vitalwatch_server::app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
