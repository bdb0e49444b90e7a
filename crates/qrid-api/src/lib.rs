//! JSON REST API for qrid.
//!
//! Exposes an axum [`Router`] backed by any [`qrid_core::store::IdentityStore`]
//! and a [`CodeRenderer`]. Transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", qrid_api::api_router(store.clone(), renderer.clone()))
//! ```

pub mod error;
pub mod present;
pub mod users;

use std::sync::Arc;

use axum::{Router, routing::get};
use qrid_core::store::IdentityStore;
use qrid_render::CodeRenderer;

pub use error::ApiError;

/// State shared by the API handlers.
pub struct ApiState<S> {
  pub store:    Arc<S>,
  pub renderer: Arc<dyn CodeRenderer>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      renderer: Arc::clone(&self.renderer),
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, renderer: Arc<dyn CodeRenderer>) -> Router<()>
where
  S: IdentityStore + 'static,
{
  Router::new()
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route(
      "/users/{id}",
      get(users::get_one::<S>).delete(users::delete_one::<S>),
    )
    .route("/users/{id}/qr", get(users::qr::<S>))
    .with_state(ApiState { store, renderer })
}

// ─── Integration tests ────────────────────────────────────────────────────────
