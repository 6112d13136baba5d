//! Core types and trait definitions for the Proof of Taste tasting log.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod account;
pub mod curated;
pub mod error;
pub mod identity;
pub mod store;
pub mod subject;
pub mod tasting;
pub mod upsert;

pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod testutil;
