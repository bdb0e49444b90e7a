//! Code rendering adapter for qrid.
//!
//! Turns arbitrary text into an inline-embeddable PNG. Symbol construction
//! (module layout, error correction, masking) is delegated to the `qrcode`
//! crate; this crate only rasterises the resulting module grid according to
//! [`RenderOptions`] and wraps it as a `data:` URI.

pub mod artifact;
pub mod error;
pub mod options;
pub mod qr;

use std::sync::Arc;

pub use artifact::Artifact;
pub use error::RenderError;
pub use options::{Color, EcLevel, RenderOptions};
pub use qr::QrRenderer;

/// Something that can turn a text payload into an image [`Artifact`].
///
/// Rendering is CPU-bound and synchronous; use [`render_payload`] from async
/// code.
pub trait CodeRenderer: Send + Sync {
  fn render(&self, payload: &str) -> Result<Artifact, RenderError>;
}

/// Render `payload` on the blocking pool.
///
/// Only the calling task suspends while the image is built.
pub async fn render_payload(
  renderer: Arc<dyn CodeRenderer>,
  payload: String,
) -> Result<Artifact, RenderError> {
  tokio::task::spawn_blocking(move || renderer.render(&payload)).await?
}
