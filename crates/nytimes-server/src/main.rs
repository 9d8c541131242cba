use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nytimes_client::NytClient;
use nytimes_server::app_state::AppState;
use nytimes_server::config::{ServerConfig, Transport};
use nytimes_server::{router, stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = ServerConfig::load_env_file();

    // stdout belongs to the stdio transport, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = ServerConfig::parse();
    let upstream = config.upstream()?;
    tracing::debug!(?upstream, "Upstream configured");

    let state = AppState::new(Arc::new(NytClient::new(upstream)));

    match config.transport {
        Transport::Stdio => {
            tracing::info!("NYTimes MCP server running on stdio");
            stdio::serve(state, tokio::io::stdin(), tokio::io::stdout()).await?;
        }
        Transport::Http => {
            let app = router::create_router(state);
            let addr = config.bind_addr();
            tracing::info!("NYTimes MCP server listening on {addr}");

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
