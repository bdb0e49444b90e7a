//! Error type for `qrid-render`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
  /// The payload could not be encoded, e.g. it exceeds symbol capacity.
  #[error("encode error: {0}")]
  Encode(#[from] qrcode::types::QrError),

  #[error("image error: {0}")]
  Image(#[from] image::ImageError),

  #[error("render task failed: {0}")]
  Join(#[from] tokio::task::JoinError),

  #[error("invalid color {0:?}: expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
  InvalidColor(String),
}

impl From<RenderError> for qrid_core::Error {
  fn from(e: RenderError) -> Self { qrid_core::Error::Render(Box::new(e)) }
}
