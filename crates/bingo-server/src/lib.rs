//! Process-level wiring for the bingo goal service.
//!
//! Holds the runtime configuration and wraps the API router in the CORS and
//! request-tracing layers. The binary in `main.rs` only loads settings, opens
//! the store and serves the router built here.

pub mod error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use bingo_api::api_router;
use bingo_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

pub use error::{Error, Result};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `BINGO_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  #[serde(default = "default_store_path")]
  pub store_path:   PathBuf,
  /// Origin allowed to call the API from a browser. Any origin if unset.
  #[serde(default)]
  pub frontend_url: Option<String>,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("bingo.db") }

impl ServerConfig {
  /// Layer an optional TOML file under `BINGO_*` environment variables.
  ///
  /// A bare `PORT` variable, as set by most container platforms, wins over
  /// both.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("BINGO").try_parsing(true))
      .set_override_option("port", std::env::var("PORT").ok())?
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the CORS layer: `GET`, `POST` and preflight `OPTIONS` with a JSON
/// `Content-Type`, restricted to `frontend_url` when one is configured.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
  let origin = match &config.frontend_url {
    Some(url) => {
      let value = HeaderValue::from_str(url).map_err(|source| {
        Error::InvalidOrigin {
          url: url.clone(),
          source,
        }
      })?;
      AllowOrigin::exact(value)
    }
    None => AllowOrigin::any(),
  };

  Ok(
    CorsLayer::new()
      .allow_origin(origin)
      .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
      .allow_headers([header::CONTENT_TYPE]),
  )
}

/// Build the full application: API routes plus CORS and tracing layers.
pub fn app(store: SqliteStore, config: &ServerConfig) -> Result<Router> {
  Ok(
    api_router(Arc::new(store))
      .layer(cors_layer(config)?)
      .layer(TraceLayer::new_for_http()),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use bingo_api::goals::{Created, GoalRow};
  use bingo_core::card::GOALS_PER_CARD;
  use config::{Config, File, FileFormat};
  use tower::ServiceExt as _;

  const FRONTEND: &str = "https://bingo.example.com";

  fn config_from(toml: &str) -> ServerConfig {
    Config::builder()
      .add_source(File::from_str(toml, FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  async fn make_app(frontend_url: Option<&str>) -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut config = config_from("");
    config.frontend_url = frontend_url.map(str::to_owned);
    app(store, &config).unwrap()
  }

  #[test]
  fn config_defaults() {
    let config = config_from("");
    assert_eq!(config.address(), "0.0.0.0:8080");
    assert_eq!(config.store_path, PathBuf::from("bingo.db"));
    assert!(config.frontend_url.is_none());
  }

  #[test]
  fn config_file_overrides_defaults() {
    let config = config_from(
      r#"
      host = "127.0.0.1"
      port = 9000
      store_path = "/var/lib/bingo/bingo.db"
      frontend_url = "https://bingo.example.com"
      "#,
    );
    assert_eq!(config.address(), "127.0.0.1:9000");
    assert_eq!(config.store_path, PathBuf::from("/var/lib/bingo/bingo.db"));
    assert_eq!(config.frontend_url.as_deref(), Some(FRONTEND));
  }

  // The only test in this crate that reads or writes process environment.
  #[test]
  fn load_layers_file_then_env_then_port() {
    let dir  = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
      &path,
      r#"
      host = "127.0.0.1"
      port = 9000
      store_path = "/srv/bingo.db"
      "#,
    )
    .unwrap();

    // SAFETY: no other test in this crate touches the environment.
    unsafe {
      std::env::set_var("BINGO_HOST", "10.0.0.1");
      std::env::set_var("BINGO_PORT", "9100");
      std::env::remove_var("PORT");
    }
    let env_only = ServerConfig::load(&path).unwrap();

    unsafe { std::env::set_var("PORT", "7777") };
    let with_port = ServerConfig::load(&path).unwrap();

    unsafe {
      std::env::remove_var("BINGO_HOST");
      std::env::remove_var("BINGO_PORT");
      std::env::remove_var("PORT");
    }
    let missing_file = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(env_only.address(), "10.0.0.1:9100");
    assert_eq!(env_only.store_path, PathBuf::from("/srv/bingo.db"));
    assert_eq!(with_port.address(), "10.0.0.1:7777");
    assert_eq!(missing_file.address(), "0.0.0.0:8080");
  }

  #[test]
  fn invalid_origin_is_rejected() {
    let mut config = config_from("");
    config.frontend_url = Some("bad\norigin".to_owned());
    assert!(matches!(cors_layer(&config), Err(Error::InvalidOrigin { .. })));
  }

  #[tokio::test]
  async fn preflight_is_answered_with_cors_headers() {
    let app = make_app(Some(FRONTEND)).await;
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/api/createGoals")
      .header(header::ORIGIN, FRONTEND)
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], FRONTEND);
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"), "allow-methods: {methods}");
  }

  #[tokio::test]
  async fn responses_carry_allow_origin() {
    let app = make_app(None).await;
    let req = Request::builder()
      .uri("/api/goals")
      .header(header::ORIGIN, FRONTEND)
      .body(Body::empty())
      .unwrap();

    // Missing bingoId: still a CORS-decorated response.
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
  }

  #[tokio::test]
  async fn full_app_creates_and_lists() {
    let app  = make_app(Some(FRONTEND)).await;
    let body = format!(
      r#"{{"goals":[{}]}}"#,
      (1..=GOALS_PER_CARD)
        .map(|n| format!("\"goal{n}\""))
        .collect::<Vec<_>>()
        .join(",")
    );
    let req = Request::builder()
      .method("POST")
      .uri("/api/createGoals")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body))
      .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let created: Created = serde_json::from_slice(&bytes).unwrap();

    let req = Request::builder()
      .uri(format!("/api/goals?bingoId={}", created.bingo_id))
      .body(Body::empty())
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<GoalRow> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(rows.len(), GOALS_PER_CARD);
  }
}
