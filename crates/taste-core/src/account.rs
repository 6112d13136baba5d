//! Username resolution and explicit account creation.

use thiserror::Error;

use crate::{
  store::TastingStore,
  subject::{Subject, SubjectId},
};

/// The reserved curator login. Checked first and unconditionally, so it can
/// never resolve to (or be registered as) an ordinary subject.
pub const CURATOR_USERNAME: &str = "curator";

/// True if `raw` normalizes to the reserved curator name.
pub fn is_curator(raw: &str) -> bool {
  raw.trim().eq_ignore_ascii_case(CURATOR_USERNAME)
}

/// Outcome of resolving a submitted username.
#[derive(Debug, Clone)]
pub enum Resolution {
  /// Privileged flow; the caller still has to check the shared secret.
  Curator,
  Existing(Subject),
  /// Not yet registered. Creation requires the explicit [`confirm`] step —
  /// accounts are never silently created.
  NeedsConfirmation(SubjectId),
}

#[derive(Debug, Error)]
pub enum AccountError<E>
where
  E: std::error::Error + Send + Sync + 'static,
{
  #[error(transparent)]
  Invalid(#[from] crate::Error),

  #[error("store error: {0}")]
  Store(E),
}

/// Resolve a raw username to a subject, a creation offer, or the curator
/// branch.
pub async fn resolve<S: TastingStore>(
  store: &S,
  raw: &str,
) -> Result<Resolution, AccountError<S::Error>> {
  if is_curator(raw) {
    return Ok(Resolution::Curator);
  }

  let id = SubjectId::new(raw)?;
  match store.get_subject(&id).await.map_err(AccountError::Store)? {
    Some(subject) => Ok(Resolution::Existing(subject)),
    None => Ok(Resolution::NeedsConfirmation(id)),
  }
}

/// The explicit confirmation step: register `id` and return the new subject.
///
/// Idempotent — if the subject raced into existence since [`resolve`], the
/// existing row is returned untouched.
pub async fn confirm<S: TastingStore>(
  store: &S,
  id: SubjectId,
) -> Result<Subject, AccountError<S::Error>> {
  if is_curator(id.as_str()) {
    return Err(AccountError::Invalid(crate::Error::ReservedUsername(
      id.as_str().to_owned(),
    )));
  }

  if let Some(existing) = store.get_subject(&id).await.map_err(AccountError::Store)? {
    return Ok(existing);
  }

  store.add_subject(id).await.map_err(AccountError::Store)
}
