//! HTTP server wiring for the HRMS API.
//!
//! Loads [`ServerConfig`], wraps the [`hrms_api`] router in the
//! cross-cutting layers (request tracing, CORS), and hands it to the binary.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use hrms_core::store::RecordStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `hrms.toml` and `HRMS_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; created on first start.
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Layer, lowest precedence first: built-in defaults, the TOML file at
  /// `path` (if it exists), then `HRMS_HOST` / `HRMS_PORT` /
  /// `HRMS_STORE_PATH`.
  pub fn load(path: impl Into<PathBuf>) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8000)?
      .set_default("store_path", "hrms.db")?
      .add_source(config::File::from(path.into()).required(false))
      .add_source(config::Environment::with_prefix("HRMS"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: API routes plus tracing and CORS layers.
///
/// CORS is wide open; the API carries no credentials of its own.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RecordStore + 'static,
{
  hrms_api::api_router(store)
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use hrms_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  #[test]
  fn config_defaults_apply_without_a_file() {
    let cfg = ServerConfig::load("does-not-exist.toml").unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.store_path, PathBuf::from("hrms.db"));
    assert_eq!(cfg.address(), format!("{}:8000", cfg.host));
  }

  #[test]
  fn config_file_overrides_defaults() {
    let path = std::env::temp_dir()
      .join(format!("hrms-config-{}.toml", std::process::id()));
    std::fs::write(&path, "port = 9100\nstore_path = \"/tmp/x.db\"\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.port, 9100);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/x.db"));

    let _ = std::fs::remove_file(&path);
  }

  #[tokio::test]
  async fn cors_headers_are_sent() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let app = app(Arc::new(store));

    let res = app
      .oneshot(
        Request::builder()
          .uri("/health")
          .header(header::ORIGIN, "http://localhost:5173")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
      res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
      "*"
    );
  }
}
