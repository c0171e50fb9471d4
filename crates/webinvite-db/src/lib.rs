//! Persistence for WebInvite: the remote backend contract with its
//! PostgreSQL and in-memory implementations, the record types that travel
//! through it, and the local snapshot storage used by the preview store.

pub mod db;
pub mod error;
pub mod model;
pub mod storage;
