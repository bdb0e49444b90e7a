//! Handlers for the interactive HTML routes.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Landing page with the create form |
//! | `POST` | `/create-user` | Form field `name`; 302 to `/user/:id/qr` |
//! | `GET`  | `/user/:id` | Plain text `id: <id>` |
//! | `GET`  | `/user/:id/qr` | HTML page embedding the code |

use axum::{
  extract::{Form, Path, State, rejection::FormRejection},
  http::{StatusCode, header},
  response::{Html, IntoResponse},
};
use qrid_api::present;
use qrid_core::store::IdentityStore;
use serde::Deserialize;

use crate::{AppState, error::Error, page};

// ─── Static ──────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn index() -> Html<&'static str> { Html(page::INDEX_HTML) }

/// `GET /styles/main.css`
pub async fn main_css() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], page::MAIN_CSS)
}

/// `GET /styles/qr.css`
pub async fn qr_css() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], page::QR_CSS)
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateForm {
  pub name: Option<String>,
}

/// `POST /create-user` — urlencoded form with a `name` field.
pub async fn create_user<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<CreateForm>, FormRejection>,
) -> Result<impl IntoResponse, Error>
where
  S: IdentityStore,
{
  let Form(form) = form.map_err(|e| Error::BadRequest(e.body_text()))?;
  let user = present::create_user(&*state.store, form.name.as_deref()).await?;
  let location = format!("/user/{}/qr", user.id);
  Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

// ─── Read ────────────────────────────────────────────────────────────────────

/// `GET /user/:id`
pub async fn user_text<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<String, Error>
where
  S: IdentityStore,
{
  let user = present::find_user(&*state.store, &id).await?;
  Ok(user.id.code_payload())
}

/// `GET /user/:id/qr`
pub async fn user_qr<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Html<String>, Error>
where
  S: IdentityStore,
{
  let (user, artifact) =
    present::user_code(&*state.store, &state.renderer, &id).await?;
  Ok(Html(page::qr_page(&user, &artifact)))
}
