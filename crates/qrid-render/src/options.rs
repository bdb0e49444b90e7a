//! Render settings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::RenderError;

// ─── Options ─────────────────────────────────────────────────────────────────

/// Recognised rendering settings, typically loaded from the `[render]`
/// table of the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
  /// Target image side in pixels.
  pub width:    u32,
  /// Quiet zone around the symbol, in modules.
  pub margin:   u32,
  pub dark:     Color,
  pub light:    Color,
  pub ec_level: EcLevel,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      width:    300,
      margin:   2,
      dark:     Color::BLACK,
      light:    Color::WHITE,
      ec_level: EcLevel::M,
    }
  }
}

// ─── Error correction ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
  L,
  M,
  Q,
  H,
}

impl From<EcLevel> for qrcode::EcLevel {
  fn from(level: EcLevel) -> Self {
    match level {
      EcLevel::L => qrcode::EcLevel::L,
      EcLevel::M => qrcode::EcLevel::M,
      EcLevel::Q => qrcode::EcLevel::Q,
      EcLevel::H => qrcode::EcLevel::H,
    }
  }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An RGBA colour, written as a CSS-style hex string in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Color {
  pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
  pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 0xff } }

  pub fn to_rgba(self) -> [u8; 4] { [self.r, self.g, self.b, self.a] }
}

impl FromStr for Color {
  type Err = RenderError;

  /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` (leading `#`
  /// optional). Missing alpha means opaque.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || RenderError::InvalidColor(s.to_owned());

    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
      return Err(invalid());
    }
    let expanded: String = match hex.len() {
      3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
      6 | 8 => hex.to_owned(),
      _ => return Err(invalid()),
    };

    let channel = |i: usize| {
      u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16).map_err(|_| invalid())
    };
    Ok(Self {
      r: channel(0)?,
      g: channel(1)?,
      b: channel(2)?,
      a: if expanded.len() == 8 { channel(3)? } else { 0xff },
    })
  }
}

impl TryFrom<String> for Color {
  type Error = RenderError;

  fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
    if self.a != 0xff {
      write!(f, "{:02X}", self.a)?;
    }
    Ok(())
  }
}

impl From<Color> for String {
  fn from(c: Color) -> Self { c.to_string() }
}
