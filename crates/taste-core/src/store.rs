//! The `TastingStore` trait.
//!
//! Implemented by storage backends (`taste-store-json`, `taste-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  curated::CuratedReview,
  subject::{Subject, SubjectId},
  tasting::TastingRecord,
};

/// Abstraction over a tasting-log backend: three keyed collections with
/// equality lookup, insert, and update-by-key.
///
/// The check-then-write sequence built on these primitives
/// ([`crate::upsert`]) is not wrapped in any transaction — two concurrent
/// writers can both observe "not found". That window is accepted, not
/// guarded.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (tokio with `axum`).
pub trait TastingStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Subjects ──────────────────────────────────────────────────────────

  /// Look up a subject by normalized id. `None` if not registered.
  fn get_subject<'a>(
    &'a self,
    id: &'a SubjectId,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + 'a;

  /// Register a subject. `created_at` is set by the store, once.
  fn add_subject(
    &self,
    id: SubjectId,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  // ── Tastings ──────────────────────────────────────────────────────────

  /// Equality lookup by derived identifier.
  ///
  /// `subject_id` scopes the lookup where the backend keys its collection
  /// per user (the file store); a shared-table backend filters on the
  /// identifier alone.
  fn find_tasting<'a>(
    &'a self,
    subject_id: &'a SubjectId,
    review_id: &'a str,
  ) -> impl Future<Output = Result<Option<TastingRecord>, Self::Error>> + Send + 'a;

  /// Append a record not previously present.
  fn insert_tasting<'a>(
    &'a self,
    record: &'a TastingRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Replace the stored record with `record`, keyed by `review_id`.
  /// Full overwrite, not a field-level merge.
  fn update_tasting<'a>(
    &'a self,
    record: &'a TastingRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// All of a subject's tastings, newest first.
  fn list_tastings<'a>(
    &'a self,
    subject_id: &'a SubjectId,
  ) -> impl Future<Output = Result<Vec<TastingRecord>, Self::Error>> + Send + 'a;

  // ── Curated reviews ───────────────────────────────────────────────────

  fn find_curated<'a>(
    &'a self,
    curated_id: &'a str,
  ) -> impl Future<Output = Result<Option<CuratedReview>, Self::Error>> + Send + 'a;

  fn insert_curated<'a>(
    &'a self,
    review: &'a CuratedReview,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
