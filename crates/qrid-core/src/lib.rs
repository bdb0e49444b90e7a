//! Core types and trait definitions for qrid.
//!
//! This crate is deliberately free of HTTP and rendering dependencies.
//! It owns the identifier derivation policy and the [`store::IdentityStore`]
//! contract; storage backends and the HTTP layers depend on it.

pub mod derive;
pub mod error;
pub mod store;
pub mod user;

pub use error::{Error, Result};
