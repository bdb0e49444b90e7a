//! Error type for the HTML routes and its `IntoResponse` implementation.
//!
//! Bodies are short plain-text messages; status codes and wording match the
//! JSON API.

use axum::response::{IntoResponse, Response};
use qrid_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] qrid_core::Error),

  #[error("bad request: {0}")]
  BadRequest(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let api = match self {
      Error::Core(e) => ApiError::Core(e),
      Error::BadRequest(m) => ApiError::BadRequest(m),
    };
    api.status_and_message().into_response()
  }
}
