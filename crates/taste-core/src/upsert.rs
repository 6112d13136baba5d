//! The idempotent-upsert routine shared by both entry kinds.
//!
//! Derive the identifier, look it up, then write. A tasting collision
//! overwrites the stored record in place; a curated collision rejects the
//! write entirely. The original restated this logic once per form; here it
//! is one unit parameterized by the store backend.

use crate::{
  curated::{CuratedDraft, CuratedReview},
  store::TastingStore,
  subject::SubjectId,
  tasting::{TastingDraft, TastingRecord},
};

/// Result of a tasting upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
  /// No record with this identifier existed; one was inserted.
  Created,
  /// A record with this identifier existed and was overwritten wholesale.
  Updated,
}

/// Result of a curated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuratedOutcome {
  Created,
  /// A review with this identifier already exists; nothing was written.
  AlreadyExists,
}

/// Insert-or-overwrite a tasting record, keyed by its derived `review_id`.
///
/// The caller is expected to have run [`TastingDraft::validate`] first.
/// The find/write pair is two separate store calls with nothing between
/// them (accepted race window).
pub async fn upsert_tasting<S: TastingStore>(
  store: &S,
  subject_id: &SubjectId,
  draft: TastingDraft,
) -> Result<(TastingRecord, UpsertOutcome), S::Error> {
  let record = draft.into_record(subject_id.clone());

  let outcome = match store.find_tasting(subject_id, &record.review_id).await? {
    Some(_) => {
      store.update_tasting(&record).await?;
      UpsertOutcome::Updated
    }
    None => {
      store.insert_tasting(&record).await?;
      UpsertOutcome::Created
    }
  };

  Ok((record, outcome))
}

/// Insert a curated review unless its identifier is already taken.
///
/// "Already exists" is terminal here, not an update trigger.
pub async fn submit_curated<S: TastingStore>(
  store: &S,
  draft: CuratedDraft,
) -> Result<(CuratedReview, CuratedOutcome), S::Error> {
  let review = draft.into_review();

  if store.find_curated(&review.curated_id).await?.is_some() {
    return Ok((review, CuratedOutcome::AlreadyExists));
  }

  store.insert_curated(&review).await?;
  Ok((review, CuratedOutcome::Created))
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::testutil::MemStore;

  fn subject() -> SubjectId {
    SubjectId::new("alice").unwrap()
  }

  fn draft() -> TastingDraft {
    TastingDraft {
      date:          NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
      distillery:    "Buffalo Trace".into(),
      bourbon_name:  "Eagle Rare".into(),
      proof:         90.0,
      notes:         "Smooth".into(),
      single_barrel: false,
    }
  }

  fn curated_draft() -> CuratedDraft {
    CuratedDraft {
      bourbon_name:  "Eagle Rare".into(),
      distillery:    "Buffalo Trace".into(),
      proof:         90.0,
      review_text:   "Exceptional value".into(),
      url:           "https://example.com/reviews/eagle-rare".into(),
      single_barrel: false,
    }
  }

  #[tokio::test]
  async fn first_submission_creates() {
    let store = MemStore::default();
    let (record, outcome) = upsert_tasting(&store, &subject(), draft()).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(store.tasting_count(), 1);
    assert_eq!(record.review_id, draft().review_id());
  }

  #[tokio::test]
  async fn resubmission_overwrites_in_place() {
    let store = MemStore::default();
    upsert_tasting(&store, &subject(), draft()).await.unwrap();

    // Same identity fields, different non-identity field.
    let mut second = draft();
    second.single_barrel = true;
    let (_, outcome) = upsert_tasting(&store, &subject(), second).await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(store.tasting_count(), 1, "store size must not grow");
    let stored = store
      .find_tasting(&subject(), &draft().review_id())
      .await
      .unwrap()
      .unwrap();
    assert!(stored.single_barrel, "content must be the new record");
  }

  #[tokio::test]
  async fn different_identity_fields_create_a_second_record() {
    let store = MemStore::default();
    upsert_tasting(&store, &subject(), draft()).await.unwrap();

    let mut second = draft();
    second.notes = "Leather and oak".into();
    let (_, outcome) = upsert_tasting(&store, &subject(), second).await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(store.tasting_count(), 2);
  }

  #[tokio::test]
  async fn curated_duplicate_is_rejected_not_overwritten() {
    let store = MemStore::default();
    let (_, first) = submit_curated(&store, curated_draft()).await.unwrap();
    assert_eq!(first, CuratedOutcome::Created);

    let mut dup = curated_draft();
    dup.single_barrel = true;
    let (_, second) = submit_curated(&store, dup).await.unwrap();

    assert_eq!(second, CuratedOutcome::AlreadyExists);
    assert_eq!(store.curated_count(), 1);
    let stored = store
      .find_curated(&curated_draft().curated_id())
      .await
      .unwrap()
      .unwrap();
    assert!(!stored.single_barrel, "store must be left unchanged");
  }
}
