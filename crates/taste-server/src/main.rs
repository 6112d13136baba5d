//! taste-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! configured store backend, and serves the tasting-log API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use taste_core::store::TastingStore;
use taste_server::{AppState, ServerConfig, StoreBackend, auth::CuratorAuth};
use taste_store_json::JsonStore;
use taste_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Proof of Taste tasting-log server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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
    .add_source(config::Environment::with_prefix("TASTE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  match server_cfg.backend {
    StoreBackend::Json => {
      let store = JsonStore::open(&server_cfg.data_dir)
        .await
        .with_context(|| {
          format!("failed to open data directory {:?}", server_cfg.data_dir)
        })?;
      serve(store, server_cfg).await
    }
    StoreBackend::Sqlite => {
      let store = SqliteStore::open(&server_cfg.db_path)
        .await
        .with_context(|| {
          format!("failed to open database {:?}", server_cfg.db_path)
        })?;
      serve(store, server_cfg).await
    }
  }
}

/// Build state for the chosen backend and run the server.
async fn serve<S>(store: S, cfg: ServerConfig) -> anyhow::Result<()>
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  let state = AppState {
    store: Arc::new(store),
    auth:  Arc::new(CuratorAuth { password: cfg.curator_password.clone() }),
  };

  let app = taste_server::router(state);
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
