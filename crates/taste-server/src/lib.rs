//! HTTP JSON API for the Proof of Taste tasting log.
//!
//! Exposes an axum [`Router`] backed by any [`TastingStore`]. The router is
//! generic over the backend; the binary picks one from configuration.

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use taste_core::store::TastingStore;
use tower_http::trace::TraceLayer;

use auth::CuratorAuth;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Which store backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
  /// JSON documents under `data_dir`, one tasting file per subject.
  Json,
  /// Shared relational tables in a single SQLite file at `db_path`.
  Sqlite,
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `TASTE_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:    String,
  pub port:    u16,
  pub backend: StoreBackend,
  pub data_dir: PathBuf,
  pub db_path:  PathBuf,
  /// Shared secret for the curator login, compared verbatim.
  pub curator_password: String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: TastingStore> {
  pub store: Arc<S>,
  pub auth:  Arc<CuratorAuth>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the tasting-log API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/session", post(handlers::session::resolve::<S>))
    .route("/subjects", post(handlers::subjects::confirm::<S>))
    .route(
      "/subjects/{id}/tastings",
      get(handlers::tastings::history::<S>).post(handlers::tastings::submit::<S>),
    )
    .route("/curated", post(handlers::curated::submit::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
