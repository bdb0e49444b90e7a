//! [`QrRenderer`] — rasterises QR symbols built by the `qrcode` crate.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::QrCode;

use crate::{Artifact, CodeRenderer, RenderError, RenderOptions};

/// Pixels per module when `width` is too small to fit the symbol.
const FALLBACK_SCALE: f64 = 4.0;

/// Renders QR codes as PNG images according to fixed [`RenderOptions`].
#[derive(Debug, Clone, Default)]
pub struct QrRenderer {
  options: RenderOptions,
}

impl QrRenderer {
  pub fn new(options: RenderOptions) -> Self { Self { options } }

  pub fn options(&self) -> &RenderOptions { &self.options }

  /// Lay the symbol's modules out into an RGBA image.
  ///
  /// Modules may be stretched unevenly by one pixel so the image side
  /// matches `width` exactly; the quiet zone uses the light colour.
  fn rasterise(&self, code: &QrCode) -> RgbaImage {
    let opts = &self.options;
    let modules = code.width();
    let colors = code.to_colors();

    let span = modules as f64 + 2.0 * opts.margin as f64;
    let scale = if opts.width as f64 >= span {
      opts.width as f64 / span
    } else {
      FALLBACK_SCALE
    };
    let side = (span * scale).floor() as u32;
    let offset = (opts.margin as f64 * scale).floor() as u32;

    let dark = Rgba(opts.dark.to_rgba());
    let light = Rgba(opts.light.to_rgba());

    RgbaImage::from_fn(side, side, |x, y| {
      let inside = |p: u32| p >= offset && p < side - offset;
      if !(inside(x) && inside(y)) {
        return light;
      }
      let to_module =
        |p: u32| (((p - offset) as f64 / scale) as usize).min(modules - 1);
      match colors[to_module(y) * modules + to_module(x)] {
        qrcode::Color::Dark => dark,
        qrcode::Color::Light => light,
      }
    })
  }
}

impl CodeRenderer for QrRenderer {
  fn render(&self, payload: &str) -> Result<Artifact, RenderError> {
    let code = QrCode::with_error_correction_level(
      payload.as_bytes(),
      self.options.ec_level.into(),
    )?;
    let image = self.rasterise(&code);

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    tracing::trace!(
      payload_len = payload.len(),
      modules = code.width(),
      side = image.width(),
      "rendered code"
    );
    Ok(Artifact { png, side: image.width() })
  }
}
