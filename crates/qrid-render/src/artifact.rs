//! The rendered image and its `data:` URI form.

use base64::{Engine as _, engine::general_purpose::STANDARD as B64};

/// A rendered PNG image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
  /// Encoded PNG bytes.
  pub png:  Vec<u8>,
  /// Side length in pixels; the image is square.
  pub side: u32,
}

impl Artifact {
  pub const MIME: &'static str = "image/png";

  /// `data:image/png;base64,…`, suitable for an `<img src>` attribute.
  pub fn data_uri(&self) -> String {
    format!("data:{};base64,{}", Self::MIME, B64.encode(&self.png))
  }
}
