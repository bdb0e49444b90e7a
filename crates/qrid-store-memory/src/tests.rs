//! Behavioural tests for `MemoryStore`.

use std::{collections::HashSet, sync::Arc};

use qrid_core::{
  Error,
  derive::{Deriver, derive},
  store::IdentityStore,
  user::{NormalizedName, UserId},
};

use crate::MemoryStore;

fn name(s: &str) -> NormalizedName { NormalizedName::parse(s).unwrap() }

/// Assigns every name the same identifier.
struct FixedDeriver(&'static str);

impl Deriver for FixedDeriver {
  fn derive(&self, _name: &NormalizedName) -> UserId {
    UserId::parse(self.0).unwrap()
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_round_trips() {
  let s = MemoryStore::new();

  let user = s.create(name("  Alice  ")).await.unwrap();
  assert_eq!(user.id, derive(&name("Alice")));
  assert_eq!(user.name.as_str(), "Alice");

  let fetched = s.get(&user.id).await.unwrap().expect("stored");
  assert_eq!(fetched, user);
}

#[tokio::test]
async fn same_normalised_name_conflicts() {
  let s = MemoryStore::new();

  let first = s.create(name("Alice")).await.unwrap();
  let err = s.create(name("alice")).await.unwrap_err();
  assert!(matches!(err, Error::Conflict(ref id) if *id == first.id));

  // The original record is untouched.
  let kept = s.get(&first.id).await.unwrap().unwrap();
  assert_eq!(kept.name.as_str(), "Alice");
  assert_eq!(s.len().await, 1);
}

#[tokio::test]
async fn different_names_get_different_ids() {
  let s = MemoryStore::new();

  let alice = s.create(name("Alice")).await.unwrap();
  let bob = s.create(name("Bob")).await.unwrap();
  assert_ne!(alice.id, bob.id);
  assert_eq!(s.get(&bob.id).await.unwrap().unwrap().name.as_str(), "Bob");
}

#[tokio::test]
async fn incidental_collision_is_a_conflict_not_an_overwrite() {
  let s = MemoryStore::with_deriver(FixedDeriver("0000000001"));

  s.create(name("Alice")).await.unwrap();
  let err = s.create(name("Bob")).await.unwrap_err();
  assert!(matches!(err, Error::Conflict(_)));

  let id = UserId::parse("0000000001").unwrap();
  assert_eq!(s.get(&id).await.unwrap().unwrap().name.as_str(), "Alice");
}

// ─── Not found ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_id_is_not_found_for_get_and_delete() {
  let s = MemoryStore::new();
  let id = UserId::parse("0000999999").unwrap();

  assert!(s.get(&id).await.unwrap().is_none());
  assert!(matches!(s.delete(&id).await, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_the_record() {
  let s = MemoryStore::new();
  let user = s.create(name("Alice")).await.unwrap();

  s.delete(&user.id).await.unwrap();
  assert!(s.get(&user.id).await.unwrap().is_none());
  assert!(matches!(s.delete(&user.id).await, Err(Error::NotFound(_))));
  assert_eq!(s.len().await, 0);
}

#[tokio::test]
async fn deleted_name_can_be_created_again() {
  let s = MemoryStore::new();
  let first = s.create(name("Alice")).await.unwrap();
  s.delete(&first.id).await.unwrap();

  let again = s.create(name("ALICE")).await.unwrap();
  assert_eq!(again.id, first.id);
  assert_eq!(again.name.as_str(), "ALICE");
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_every_record() {
  let s = MemoryStore::new();
  assert!(s.list().await.unwrap().is_empty());

  for n in ["Alice", "Bob", "Carol"] {
    s.create(name(n)).await.unwrap();
  }

  let names: HashSet<String> = s
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|u| u.name.to_string())
    .collect();
  assert_eq!(names, HashSet::from(["Alice", "Bob", "Carol"].map(String::from)));
}

#[tokio::test]
async fn clones_share_state() {
  let s = MemoryStore::new();
  let other = s.clone();
  let user = s.create(name("Alice")).await.unwrap();
  assert!(other.get(&user.id).await.unwrap().is_some());
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_creates_for_one_name_admit_exactly_one() {
  let s = Arc::new(MemoryStore::new());

  let handles: Vec<_> = (0..64)
    .map(|i| {
      let s = Arc::clone(&s);
      let raw = if i % 2 == 0 { "Alice" } else { " alice " };
      tokio::spawn(async move { s.create(name(raw)).await })
    })
    .collect();

  let mut created = 0;
  let mut conflicts = 0;
  for h in handles {
    match h.await.unwrap() {
      Ok(_) => created += 1,
      Err(Error::Conflict(_)) => conflicts += 1,
      Err(e) => panic!("unexpected error: {e}"),
    }
  }

  assert_eq!(created, 1);
  assert_eq!(conflicts, 63);
  assert_eq!(s.len().await, 1);
}
