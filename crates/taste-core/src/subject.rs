//! Subject — a registered end user, identified by a case-insensitive
//! username.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A normalized (trimmed, lowercased) username.
///
/// Construction is the only normalization point; everything downstream
/// compares ids byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
  /// Normalize `raw`; rejects input that is empty after trimming.
  pub fn new(raw: &str) -> Result<Self> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
      return Err(Error::EmptyUsername);
    }
    Ok(Self(normalized))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for SubjectId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

/// A registered user. Created the first time a not-yet-seen username is
/// explicitly confirmed; never updated or deleted thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
  pub subject_id: SubjectId,
  pub created_at: DateTime<Utc>,
}
