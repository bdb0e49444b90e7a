//! In-memory backend for the qrid identity store.
//!
//! Records live for the lifetime of the process and are lost on restart.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
