use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use memrelay::config::Config;
use memrelay::relay::RelayClient;
use memrelay::server::{AppState, build_app};

#[derive(Parser)]
#[command(
    name = "memrelay",
    version,
    about = "Chat-completion relay through the Supermemory memory proxy"
)]
struct Cli {
    /// Path to the YAML config file.
    #[arg(short, long, default_value = "memrelay.yaml")]
    config: PathBuf,

    /// Override the configured listen port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memrelay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load(&cli.config).await?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!("Starting memrelay v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Memory proxy: {}", config.relay.proxy_base_url);

    let state = AppState {
        relay: Arc::new(RelayClient::new(config.relay.proxy_base_url.clone())),
    };
    let app = build_app(state, config.server.request_timeout_seconds);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
