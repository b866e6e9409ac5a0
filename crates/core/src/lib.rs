//! Domain types shared across the keygate workspace.
//!
//! Holds the error taxonomy, the closed role set, and the credential
//! validation rules. This crate is I/O-free; persistence and HTTP concerns
//! live in `keygate-db` and `keygate-api`.

pub mod credentials;
pub mod error;
pub mod roles;
pub mod types;
