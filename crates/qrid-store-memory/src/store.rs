//! [`MemoryStore`] — the in-memory implementation of [`IdentityStore`].

use std::{
  collections::{HashMap, hash_map::Entry},
  fmt,
  sync::Arc,
};

use chrono::Utc;
use tokio::sync::RwLock;

use qrid_core::{
  Error, Result,
  derive::{Deriver, DigestDeriver},
  store::IdentityStore,
  user::{NormalizedName, User, UserId},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A qrid identity store backed by a `HashMap` behind an async lock.
///
/// Cloning is cheap — clones share the same map and deriver.
#[derive(Clone)]
pub struct MemoryStore {
  users:   Arc<RwLock<HashMap<UserId, User>>>,
  deriver: Arc<dyn Deriver>,
}

impl MemoryStore {
  /// An empty store using the default [`DigestDeriver`].
  pub fn new() -> Self { Self::with_deriver(DigestDeriver) }

  /// An empty store that assigns identifiers with `deriver`.
  pub fn with_deriver(deriver: impl Deriver + 'static) -> Self {
    Self {
      users:   Arc::new(RwLock::new(HashMap::new())),
      deriver: Arc::new(deriver),
    }
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl fmt::Debug for MemoryStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MemoryStore").finish_non_exhaustive()
  }
}

// ─── IdentityStore impl ──────────────────────────────────────────────────────

impl IdentityStore for MemoryStore {
  async fn create(&self, name: NormalizedName) -> Result<User> {
    let id = self.deriver.derive(&name);

    // Check and insert under one write guard.
    let mut users = self.users.write().await;
    match users.entry(id) {
      Entry::Occupied(existing) => {
        tracing::debug!(id = %existing.key(), "identifier already assigned");
        Err(Error::Conflict(existing.key().clone()))
      }
      Entry::Vacant(slot) => {
        let user = User {
          id: slot.key().clone(),
          name,
          created_at: Utc::now(),
        };
        tracing::debug!(id = %user.id, "user created");
        Ok(slot.insert(user).clone())
      }
    }
  }

  async fn get(&self, id: &UserId) -> Result<Option<User>> {
    Ok(self.users.read().await.get(id).cloned())
  }

  async fn list(&self) -> Result<Vec<User>> {
    let mut users: Vec<User> =
      self.users.read().await.values().cloned().collect();
    users.sort_by(|a, b| {
      a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id))
    });
    Ok(users)
  }

  async fn delete(&self, id: &UserId) -> Result<()> {
    match self.users.write().await.remove(id) {
      Some(_) => {
        tracing::debug!(%id, "user deleted");
        Ok(())
      }
      None => Err(Error::NotFound(id.to_string())),
    }
  }

  async fn len(&self) -> usize { self.users.read().await.len() }
}
