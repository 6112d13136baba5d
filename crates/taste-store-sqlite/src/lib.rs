//! SQLite backend for the Proof of Taste store.
//!
//! One shared table per entity kind, keyed by the derived identifier — the
//! relational counterpart of the per-subject JSON files. Wraps
//! [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
