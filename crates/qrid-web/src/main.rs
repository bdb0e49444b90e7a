//! qrid server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) and `QRID_*`
//! environment variables, then serves the HTML pages and the JSON API from
//! an in-memory identity store. `PORT` (or `--port`) overrides the port.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use qrid_render::QrRenderer;
use qrid_store_memory::MemoryStore;
use qrid_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "qrid QR code identity server")]
struct Cli {
  /// Path to the TOML configuration file. Missing is not an error.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Address to bind, overriding the configuration.
  #[arg(long)]
  host: Option<String>,

  /// Port to listen on, overriding the configuration.
  #[arg(short, long, env = "PORT")]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("QRID")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  if let Some(host) = cli.host {
    server_cfg.host = host;
  }
  if let Some(port) = cli.port {
    server_cfg.port = port;
  }

  let state = AppState {
    store:    Arc::new(MemoryStore::new()),
    renderer: Arc::new(QrRenderer::new(server_cfg.render.clone())),
  };

  let app = qrid_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("QR code server listening on http://{address}");

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
