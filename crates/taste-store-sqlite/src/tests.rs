//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use taste_core::{
  curated::CuratedDraft,
  store::TastingStore,
  subject::SubjectId,
  tasting::TastingDraft,
  upsert::{self, CuratedOutcome, UpsertOutcome},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn alice() -> SubjectId {
  SubjectId::new("alice").unwrap()
}

fn draft(date: &str, notes: &str) -> TastingDraft {
  TastingDraft {
    date:          date.parse().unwrap(),
    distillery:    "Buffalo Trace".into(),
    bourbon_name:  "Eagle Rare".into(),
    proof:         90.0,
    notes:         notes.into(),
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

// ─── Subjects ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_subject() {
  let s = store().await;

  let subject = s.add_subject(alice()).await.unwrap();
  assert_eq!(subject.subject_id, alice());

  let fetched = s.get_subject(&alice()).await.unwrap();
  assert!(fetched.is_some());
  assert_eq!(fetched.unwrap().subject_id, alice());
}

#[tokio::test]
async fn get_subject_missing_returns_none() {
  let s = store().await;
  let result = s.get_subject(&alice()).await.unwrap();
  assert!(result.is_none());
}

// ─── Tastings ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_find_and_round_trip_fields() {
  let s = store().await;
  s.add_subject(alice()).await.unwrap();

  let record = draft("2024-01-01", "Smooth").into_record(alice());
  s.insert_tasting(&record).await.unwrap();

  let found = s
    .find_tasting(&alice(), &record.review_id)
    .await
    .unwrap()
    .expect("record present");
  assert_eq!(found.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
  assert_eq!(found.distillery, "Buffalo Trace");
  assert_eq!(found.proof, 90.0);
  assert!(!found.single_barrel);
}

#[tokio::test]
async fn update_overwrites_the_full_row() {
  let s = store().await;
  s.add_subject(alice()).await.unwrap();

  let record = draft("2024-01-01", "Smooth").into_record(alice());
  s.insert_tasting(&record).await.unwrap();

  let mut updated = record.clone();
  updated.single_barrel = true;
  s.update_tasting(&updated).await.unwrap();

  let records = s.list_tastings(&alice()).await.unwrap();
  assert_eq!(records.len(), 1, "update must not add a row");
  assert!(records[0].single_barrel);
}

#[tokio::test]
async fn list_sorts_by_date_descending() {
  let s = store().await;
  s.add_subject(alice()).await.unwrap();

  s.insert_tasting(&draft("2024-01-01", "Oldest").into_record(alice()))
    .await
    .unwrap();
  s.insert_tasting(&draft("2024-03-01", "Newest").into_record(alice()))
    .await
    .unwrap();
  s.insert_tasting(&draft("2024-02-01", "Middle").into_record(alice()))
    .await
    .unwrap();

  let records = s.list_tastings(&alice()).await.unwrap();
  let notes: Vec<&str> = records.iter().map(|r| r.notes.as_str()).collect();
  assert_eq!(notes, ["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn list_is_scoped_to_the_subject() {
  let s = store().await;
  let bob = SubjectId::new("bob").unwrap();
  s.add_subject(alice()).await.unwrap();
  s.add_subject(bob.clone()).await.unwrap();

  s.insert_tasting(&draft("2024-01-01", "Smooth").into_record(alice()))
    .await
    .unwrap();

  assert!(s.list_tastings(&bob).await.unwrap().is_empty());
}

// ─── Upsert through the generic routine ──────────────────────────────────────

#[tokio::test]
async fn resubmission_updates_in_place() {
  let s = store().await;
  s.add_subject(alice()).await.unwrap();

  let (_, first) = upsert::upsert_tasting(&s, &alice(), draft("2024-01-01", "Smooth"))
    .await
    .unwrap();
  assert_eq!(first, UpsertOutcome::Created);

  let mut resubmit = draft("2024-01-01", "smooth");
  resubmit.single_barrel = true;
  let (_, second) = upsert::upsert_tasting(&s, &alice(), resubmit)
    .await
    .unwrap();
  assert_eq!(second, UpsertOutcome::Updated);

  let records = s.list_tastings(&alice()).await.unwrap();
  assert_eq!(records.len(), 1);
  assert!(records[0].single_barrel);
}

// ─── Curated reviews ─────────────────────────────────────────────────────────

#[tokio::test]
async fn curated_insert_and_find() {
  let s = store().await;

  let review = curated_draft().into_review();
  s.insert_curated(&review).await.unwrap();

  let found = s.find_curated(&review.curated_id).await.unwrap();
  assert!(found.is_some());
  assert_eq!(found.unwrap().review_text, "Exceptional value");
}

#[tokio::test]
async fn curated_duplicate_is_rejected() {
  let s = store().await;

  let (_, first) = upsert::submit_curated(&s, curated_draft()).await.unwrap();
  assert_eq!(first, CuratedOutcome::Created);

  let (_, second) = upsert::submit_curated(&s, curated_draft()).await.unwrap();
  assert_eq!(second, CuratedOutcome::AlreadyExists);

  let found = s
    .find_curated(&curated_draft().curated_id())
    .await
    .unwrap();
  assert!(found.is_some());
}
