//! Identifier derivation: name → [`UserId`].
//!
//! The default policy is [`DigestDeriver`]: a pure function of the
//! normalised, lower-cased name. Re-submitting a name therefore always lands
//! on the same identifier, and a returning user can recompute theirs
//! without asking the server.
//!
//! # Collision bound
//!
//! The SHA-256 digest is collapsed to a ten-digit decimal string, so the
//! identifier space is at most 10^10 values and the birthday bound applies
//! to that space, not to the digest. Collisions are rare but possible; the
//! store reports them as conflicts rather than overwriting.

use sha2::{Digest, Sha256};

use crate::user::{NormalizedName, UserId};

/// Maps a normalised name to an identifier.
pub trait Deriver: Send + Sync {
  fn derive(&self, name: &NormalizedName) -> UserId;
}

/// SHA-256 based deterministic deriver.
///
/// Case- and whitespace-insensitive: `" Alice "` and `"alice"` derive the
/// same identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestDeriver;

impl Deriver for DigestDeriver {
  fn derive(&self, name: &NormalizedName) -> UserId { derive(name) }
}

/// Derive the identifier for `name` with the default digest policy.
pub fn derive(name: &NormalizedName) -> UserId {
  let digest = Sha256::digest(name.as_str().trim().to_lowercase().as_bytes());

  // The first 15 hex digits of the digest, i.e. its leading 60 bits.
  let mut head = [0u8; 8];
  head.copy_from_slice(&digest[..8]);
  let prefix = u64::from_be_bytes(head) >> 4;

  // Widened through a double and printed in shortest round-trip form.
  // Identifiers already printed on issued codes were produced this way, so
  // the low digits must round exactly as they did there.
  let decimal = (prefix as f64).to_string();

  let mut digits = format!("{decimal:0>width$}", width = UserId::WIDTH);
  digits.truncate(UserId::WIDTH);
  UserId::from_digits(digits)
}
