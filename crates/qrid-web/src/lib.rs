//! HTTP surface for qrid.
//!
//! Combines the interactive HTML routes with the JSON API from `qrid-api`
//! (nested under `/api`) into a single axum [`Router`].

pub mod error;
pub mod handlers;
pub mod page;

pub use error::Error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use qrid_core::store::IdentityStore;
use qrid_render::RenderOptions;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Shared state threaded through all handlers.
pub type AppState<S> = qrid_api::ApiState<S>;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:   String,
  pub port:   u16,
  /// Appearance of rendered codes.
  pub render: RenderOptions,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:   "0.0.0.0".to_string(),
      port:   3001,
      render: RenderOptions::default(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: IdentityStore + 'static,
{
  let api = qrid_api::api_router(Arc::clone(&state.store), Arc::clone(&state.renderer));

  Router::new()
    .route("/",                get(handlers::index))
    .route("/styles/main.css", get(handlers::main_css))
    .route("/styles/qr.css",   get(handlers::qr_css))
    .route("/create-user",     post(handlers::create_user::<S>))
    .route("/user/{id}",       get(handlers::user_text::<S>))
    .route("/user/{id}/qr",    get(handlers::user_qr::<S>))
    .with_state(state)
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use qrid_core::{derive::derive, user::NormalizedName};
  use qrid_render::QrRenderer;
  use qrid_store_memory::MemoryStore;
  use tower::ServiceExt as _;

  use super::*;

  fn make_state() -> AppState<MemoryStore> {
    AppState {
      store:    Arc::new(MemoryStore::new()),
      renderer: Arc::new(QrRenderer::new(ServerConfig::default().render)),
    }
  }

  async fn oneshot_raw(
    state:  AppState<MemoryStore>,
    method: &str,
    uri:    &str,
    form:   Option<&str>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if form.is_some() {
      builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    let req = builder.body(Body::from(form.unwrap_or_default().to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn id_for(name: &str) -> String {
    derive(&NormalizedName::parse(name).unwrap()).to_string()
  }

  // ── Static ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn landing_page_and_styles_are_served() {
    let state = make_state();

    let resp = oneshot_raw(state.clone(), "GET", "/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("/create-user"));

    for uri in ["/styles/main.css", "/styles/qr.css"] {
      let resp = oneshot_raw(state.clone(), "GET", uri, None).await;
      assert_eq!(resp.status(), StatusCode::OK);
      let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
      assert!(ct.starts_with("text/css"), "Content-Type: {ct}");
    }
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_user_redirects_to_qr_page() {
    let state = make_state();
    let resp = oneshot_raw(state, "POST", "/create-user", Some("name=+Alice+")).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert_eq!(location, format!("/user/{}/qr", id_for("Alice")));
  }

  #[tokio::test]
  async fn create_user_twice_is_409() {
    let state = make_state();
    oneshot_raw(state.clone(), "POST", "/create-user", Some("name=Alice")).await;
    let resp = oneshot_raw(state, "POST", "/create-user", Some("name=ALICE")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(resp).await, "User already exists");
  }

  #[tokio::test]
  async fn create_user_without_name_is_400() {
    let state = make_state();
    for form in ["name=", "name=++", ""] {
      let resp = oneshot_raw(state.clone(), "POST", "/create-user", Some(form)).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "form {form:?}");
      assert_eq!(body_text(resp).await, "Name is required");
    }
    assert_eq!(state.store.len().await, 0);
  }

  // ── Read ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn user_route_returns_labelled_id() {
    let state = make_state();
    oneshot_raw(state.clone(), "POST", "/create-user", Some("name=Bob")).await;

    let id = id_for("Bob");
    let resp = oneshot_raw(state, "GET", &format!("/user/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, format!("id: {id}"));
  }

  #[tokio::test]
  async fn unknown_user_is_404_on_both_routes() {
    let state = make_state();
    for uri in ["/user/999999", "/user/999999/qr", "/user/0000000001/qr"] {
      let resp = oneshot_raw(state.clone(), "GET", uri, None).await;
      assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
      assert_eq!(body_text(resp).await, "User not found");
    }
  }

  #[tokio::test]
  async fn qr_page_embeds_code_and_escapes_name() {
    let state = make_state();
    oneshot_raw(
      state.clone(),
      "POST",
      "/create-user",
      Some("name=%3Cscript%3EEve%3C%2Fscript%3E"),
    )
    .await;

    let id = id_for("<script>Eve</script>");
    let resp = oneshot_raw(state, "GET", &format!("/user/{id}/qr"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.starts_with("text/html"), "Content-Type: {ct}");

    let html = body_text(resp).await;
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains(&format!(r#"<span id="user-id">{id}</span>"#)));
    assert!(html.contains("&lt;script&gt;Eve&lt;/script&gt;"));
    assert!(!html.contains("<script>Eve"));
  }

  // ── API mount ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn api_is_nested_and_shares_the_store() {
    let state = make_state();
    oneshot_raw(state.clone(), "POST", "/create-user", Some("name=Alice")).await;

    let resp = oneshot_raw(state, "GET", "/api/users", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let users: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(users[0]["id"], id_for("Alice"));
    assert_eq!(users[0]["name"], "Alice");
  }

  // ── Config ──────────────────────────────────────────────────────────────────

  #[test]
  fn config_defaults_apply_to_missing_fields() {
    let cfg: ServerConfig = config::Config::builder()
      .set_override("render.width", 512)
      .unwrap()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 3001);
    assert_eq!(cfg.render.width, 512);
    assert_eq!(cfg.render.margin, 2);
  }
}
