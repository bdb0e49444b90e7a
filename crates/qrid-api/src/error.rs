//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use qrid_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] CoreError),

  /// The request body could not be read as JSON.
  #[error("bad request: {0}")]
  BadRequest(String),
}

impl ApiError {
  /// Status code and client-facing message.
  ///
  /// Render failures get an opaque message; the collaborator's diagnostic
  /// is logged where it happens and never sent to the client.
  pub fn status_and_message(&self) -> (StatusCode, String) {
    match self {
      ApiError::Core(CoreError::InvalidName) => {
        (StatusCode::BAD_REQUEST, "Name is required".into())
      }
      ApiError::Core(CoreError::NotFound(_)) => {
        (StatusCode::NOT_FOUND, "User not found".into())
      }
      ApiError::Core(CoreError::Conflict(_)) => {
        (StatusCode::CONFLICT, "User already exists".into())
      }
      ApiError::Core(CoreError::Render(_)) => {
        (StatusCode::INTERNAL_SERVER_ERROR, "Error generating QR code".into())
      }
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = self.status_and_message();
    (status, Json(json!({ "error": message }))).into_response()
  }
}
