//! Handlers for `/users` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/users` | All records |
//! | `POST`   | `/users` | Body: `{"name":"Alice"}`; 201, 400 blank name, 409 taken |
//! | `GET`    | `/users/:id` | 404 if not found |
//! | `DELETE` | `/users/:id` | `{"success":true}`; 404 if not found |
//! | `GET`    | `/users/:id/qr` | `{"qr":"data:image/png;base64,…"}`; 500 on render failure |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use qrid_core::{store::IdentityStore, user::User};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{ApiState, error::ApiError, present};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<User>>, ApiError>
where
  S: IdentityStore,
{
  Ok(Json(state.store.list().await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Body of `POST /users`. `name` is loosely typed so that a missing or
/// non-string value is a 400 like a blank one, not a deserialisation error.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  #[serde(default)]
  pub name: Value,
}

/// `POST /users` — body: `{"name":"Alice"}`
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: IdentityStore,
{
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let user = present::create_user(&*state.store, body.name.as_str()).await?;
  Ok((StatusCode::CREATED, Json(user)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<User>, ApiError>
where
  S: IdentityStore,
{
  Ok(Json(present::find_user(&*state.store, &id).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /users/:id`
pub async fn delete_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: IdentityStore,
{
  present::delete_user(&*state.store, &id).await?;
  Ok(Json(json!({ "success": true })))
}

// ─── QR code ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QrBody {
  /// The rendered code as a `data:` URI.
  pub qr: String,
}

/// `GET /users/:id/qr`
pub async fn qr<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<QrBody>, ApiError>
where
  S: IdentityStore,
{
  let (_user, artifact) =
    present::user_code(&*state.store, &state.renderer, &id).await?;
  Ok(Json(QrBody { qr: artifact.data_uri() }))
}
