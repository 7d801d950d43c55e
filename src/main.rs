use clap::Parser;
use logview_core::{config::Config, LogStore};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "logview", about = "logview — file-backed log viewer backend")]
struct Cli {
    /// Path to a TOML config file (layered over the built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the backing log file path.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.data_file {
        config.storage.path = path;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let store = Arc::new(LogStore::new(&config.storage.path));
    store.ensure_initialized().await?;
    tracing::info!(path = %store.path().display(), "log store ready");

    let app = logview_api::router(store);
    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "logview listening");
    axum::serve(listener, app).await?;
    Ok(())
}
