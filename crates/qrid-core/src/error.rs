//! Error taxonomy shared by every qrid crate.

use thiserror::Error;

use crate::user::UserId;

#[derive(Debug, Error)]
pub enum Error {
  /// The supplied name is missing or blank after trimming.
  #[error("name is required")]
  InvalidName,

  /// No record exists under the given identifier. Carries the raw path
  /// segment, which may not even be a well-formed [`UserId`].
  #[error("user not found: {0}")]
  NotFound(String),

  #[error("user already exists: {0}")]
  Conflict(UserId),

  /// The code rendering collaborator failed.
  #[error("render error: {0}")]
  Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
