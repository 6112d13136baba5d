//! JSON-file backend for the Proof of Taste store.
//!
//! One document per collection: a subjects registry, a curated-reviews
//! document, and one tastings document per subject. Every change is a full
//! read-modify-rewrite of the affected document, with no atomicity against
//! concurrent writers — a second writer to the same document in that window
//! can lose updates.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;
