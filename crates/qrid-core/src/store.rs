//! The `IdentityStore` trait.
//!
//! Implemented by storage backends (e.g. `qrid-store-memory`). The HTTP
//! layers depend on this abstraction and receive a store instance by
//! injection, never through ambient state.

use std::future::Future;

use crate::{
  Result,
  user::{NormalizedName, User, UserId},
};

/// Owner of every [`User`] record for the lifetime of the process.
///
/// Records are never updated in place; the only mutations are `create` and
/// `delete`. `Conflict` and `NotFound` outcomes are returned to the caller,
/// never retried or papered over.
///
/// All methods return `Send` futures so the trait can be used from a
/// multi-threaded tokio runtime behind `axum`.
pub trait IdentityStore: Send + Sync {
  /// Derive the identifier for `name` and insert a new record under it.
  ///
  /// The existence check and the insert are a single atomic step: two
  /// concurrent calls deriving the same identifier yield exactly one
  /// success and one [`Error::Conflict`](crate::Error::Conflict).
  fn create(
    &self,
    name: NormalizedName,
  ) -> impl Future<Output = Result<User>> + Send + '_;

  /// Retrieve a record by identifier. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    id: &'a UserId,
  ) -> impl Future<Output = Result<Option<User>>> + Send + 'a;

  /// List every record.
  fn list(&self) -> impl Future<Output = Result<Vec<User>>> + Send + '_;

  /// Remove a record. Returns [`Error::NotFound`](crate::Error::NotFound) if
  /// nothing is stored under `id`.
  fn delete<'a>(
    &'a self,
    id: &'a UserId,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  /// Number of records currently held.
  fn len(&self) -> impl Future<Output = usize> + Send + '_;
}
