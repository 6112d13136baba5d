//! [`JsonStore`] — the file-backed implementation of [`TastingStore`].

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use taste_core::{
  curated::CuratedReview,
  store::TastingStore,
  subject::{Subject, SubjectId},
  tasting::TastingRecord,
};

use crate::Result;

/// A tasting log stored as JSON documents under a root directory.
///
/// Layout: `subjects.json` and `curated.json` at the root, plus
/// `tastings/<subject_id>.json` per subject. The tastings subdirectory keeps
/// a subject named `subjects` or `curated` from colliding with the registry
/// documents.
///
/// Cloning is cheap — the store holds only the root path.
#[derive(Clone)]
pub struct JsonStore {
  root: PathBuf,
}

impl JsonStore {
  /// Open (or create) a store rooted at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let root = path.as_ref().to_path_buf();
    tokio::fs::create_dir_all(root.join("tastings")).await?;
    Ok(Self { root })
  }

  fn subjects_path(&self) -> PathBuf {
    self.root.join("subjects.json")
  }

  fn curated_path(&self) -> PathBuf {
    self.root.join("curated.json")
  }

  fn tastings_path(&self, id: &SubjectId) -> PathBuf {
    self.root.join("tastings").join(format!("{id}.json"))
  }
}

/// Deserialize a whole document; a missing file is an empty collection.
async fn read_doc<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  match tokio::fs::read(path).await {
    Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
    Err(e) => Err(e.into()),
  }
}

/// Rewrite a whole document. Not atomic: a concurrent writer can interleave.
async fn write_doc<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
  let bytes = serde_json::to_vec_pretty(items)?;
  tokio::fs::write(path, bytes).await?;
  Ok(())
}

impl TastingStore for JsonStore {
  type Error = crate::Error;

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn get_subject(&self, id: &SubjectId) -> Result<Option<Subject>> {
    let subjects: Vec<Subject> = read_doc(&self.subjects_path()).await?;
    Ok(subjects.into_iter().find(|s| &s.subject_id == id))
  }

  async fn add_subject(&self, id: SubjectId) -> Result<Subject> {
    let path = self.subjects_path();
    let mut subjects: Vec<Subject> = read_doc(&path).await?;

    let subject = Subject { subject_id: id, created_at: Utc::now() };
    subjects.push(subject.clone());
    write_doc(&path, &subjects).await?;

    Ok(subject)
  }

  // ── Tastings ──────────────────────────────────────────────────────────────

  async fn find_tasting(
    &self,
    subject_id: &SubjectId,
    review_id: &str,
  ) -> Result<Option<TastingRecord>> {
    let records: Vec<TastingRecord> =
      read_doc(&self.tastings_path(subject_id)).await?;
    Ok(records.into_iter().find(|r| r.review_id == review_id))
  }

  async fn insert_tasting(&self, record: &TastingRecord) -> Result<()> {
    let path = self.tastings_path(&record.subject_id);
    let mut records: Vec<TastingRecord> = read_doc(&path).await?;

    records.push(record.clone());
    write_doc(&path, &records).await
  }

  async fn update_tasting(&self, record: &TastingRecord) -> Result<()> {
    let path = self.tastings_path(&record.subject_id);
    let mut records: Vec<TastingRecord> = read_doc(&path).await?;

    for slot in records.iter_mut() {
      if slot.review_id == record.review_id {
        *slot = record.clone();
      }
    }
    write_doc(&path, &records).await
  }

  async fn list_tastings(&self, subject_id: &SubjectId) -> Result<Vec<TastingRecord>> {
    // The document is in insertion order; history reads newest first.
    let mut records: Vec<TastingRecord> =
      read_doc(&self.tastings_path(subject_id)).await?;
    records.reverse();
    Ok(records)
  }

  // ── Curated reviews ───────────────────────────────────────────────────────

  async fn find_curated(&self, curated_id: &str) -> Result<Option<CuratedReview>> {
    let reviews: Vec<CuratedReview> = read_doc(&self.curated_path()).await?;
    Ok(reviews.into_iter().find(|r| r.curated_id == curated_id))
  }

  async fn insert_curated(&self, review: &CuratedReview) -> Result<()> {
    let path = self.curated_path();
    let mut reviews: Vec<CuratedReview> = read_doc(&path).await?;

    reviews.push(review.clone());
    write_doc(&path, &reviews).await
  }
}
