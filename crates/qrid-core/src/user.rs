//! User records and the two validated strings they are built from.
//!
//! A [`User`] is immutable once created: the store hands out clones and
//! exposes no update path.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Identifier ──────────────────────────────────────────────────────────────

/// A user identifier: exactly [`UserId::WIDTH`] ASCII decimal digits.
///
/// Always safe to use as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
  pub const WIDTH: usize = 10;

  /// Parse an identifier, returning `None` unless `s` is exactly ten digits.
  pub fn parse(s: &str) -> Option<Self> {
    (s.len() == Self::WIDTH && s.bytes().all(|b| b.is_ascii_digit()))
      .then(|| Self(s.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// The text encoded into this user's code: `"id: <id>"`.
  ///
  /// Scanners of previously issued codes expect this exact labelled form.
  pub fn code_payload(&self) -> String { format!("id: {}", self.0) }

  /// Used by derivers, which guarantee the width and digit invariants.
  pub(crate) fn from_digits(digits: String) -> Self {
    debug_assert!(Self::parse(&digits).is_some(), "malformed id {digits:?}");
    Self(digits)
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl TryFrom<String> for UserId {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    Self::parse(&s).ok_or(Error::NotFound(s))
  }
}

impl From<UserId> for String {
  fn from(id: UserId) -> Self { id.0 }
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// A display name with surrounding whitespace removed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedName(String);

impl NormalizedName {
  /// Trim `raw` and reject it if nothing is left.
  pub fn parse(raw: &str) -> Result<Self, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(Error::InvalidName);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for NormalizedName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl TryFrom<String> for NormalizedName {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> { Self::parse(&s) }
}

impl From<NormalizedName> for String {
  fn from(name: NormalizedName) -> Self { name.0 }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A user record as owned by an [`IdentityStore`](crate::store::IdentityStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:         UserId,
  pub name:       NormalizedName,
  pub created_at: DateTime<Utc>,
}
