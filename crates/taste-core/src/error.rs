//! Error types for `taste-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("proof must be between 0 and 200, got {0}")]
  ProofOutOfRange(f64),

  #[error("username must not be empty")]
  EmptyUsername,

  #[error("{0:?} is a reserved username")]
  ReservedUsername(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
