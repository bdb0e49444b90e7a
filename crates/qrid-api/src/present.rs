//! Composition of store lookups and code rendering.
//!
//! Shared by the JSON handlers in this crate and the HTML pages in
//! `qrid-web`; each layer maps the returned [`qrid_core::Error`] onto its own
//! response format.

use std::sync::Arc;

use qrid_core::{
  Error, Result,
  store::IdentityStore,
  user::{NormalizedName, User, UserId},
};
use qrid_render::{Artifact, CodeRenderer, render_payload};

/// Validate `raw_name` and create a user for it.
///
/// Validation happens before the store is touched. A missing name is
/// treated like a blank one.
pub async fn create_user<S>(store: &S, raw_name: Option<&str>) -> Result<User>
where
  S: IdentityStore,
{
  let name = NormalizedName::parse(raw_name.unwrap_or_default())?;
  let user = store.create(name).await?;
  tracing::info!(id = %user.id, "user created");
  Ok(user)
}

/// Look up the user addressed by a raw path segment.
///
/// A segment that is not a well-formed identifier cannot name a record and
/// is reported as not found.
pub async fn find_user<S>(store: &S, raw_id: &str) -> Result<User>
where
  S: IdentityStore,
{
  let not_found = || Error::NotFound(raw_id.to_owned());
  let id = UserId::parse(raw_id).ok_or_else(not_found)?;
  store.get(&id).await?.ok_or_else(not_found)
}

/// Delete the user addressed by a raw path segment.
pub async fn delete_user<S>(store: &S, raw_id: &str) -> Result<()>
where
  S: IdentityStore,
{
  let id = UserId::parse(raw_id)
    .ok_or_else(|| Error::NotFound(raw_id.to_owned()))?;
  store.delete(&id).await?;
  tracing::info!(%id, "user deleted");
  Ok(())
}

/// Look up a user and render their code.
///
/// The rendered payload is always [`UserId::code_payload`]. Render failures
/// are logged here with full detail and returned as [`Error::Render`].
pub async fn user_code<S>(
  store: &S,
  renderer: &Arc<dyn CodeRenderer>,
  raw_id: &str,
) -> Result<(User, Artifact)>
where
  S: IdentityStore,
{
  let user = find_user(store, raw_id).await?;
  let artifact = render_payload(Arc::clone(renderer), user.id.code_payload())
    .await
    .map_err(|e| {
      tracing::error!(id = %user.id, error = %e, "failed to render code");
      Error::from(e)
    })?;
  Ok((user, artifact))
}
