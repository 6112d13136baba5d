//! A `HashMap`-and-`Vec`-backed store for exercising the generic routines.

use std::{collections::HashMap, convert::Infallible, sync::Mutex};

use chrono::Utc;

use crate::{
  curated::CuratedReview,
  store::TastingStore,
  subject::{Subject, SubjectId},
  tasting::TastingRecord,
};

#[derive(Default)]
pub struct MemStore {
  subjects: Mutex<HashMap<SubjectId, Subject>>,
  tastings: Mutex<Vec<TastingRecord>>,
  curated:  Mutex<Vec<CuratedReview>>,
}

impl MemStore {
  pub fn subject_count(&self) -> usize {
    self.subjects.lock().unwrap().len()
  }

  pub fn tasting_count(&self) -> usize {
    self.tastings.lock().unwrap().len()
  }

  pub fn curated_count(&self) -> usize {
    self.curated.lock().unwrap().len()
  }
}

impl TastingStore for MemStore {
  type Error = Infallible;

  async fn get_subject(&self, id: &SubjectId) -> Result<Option<Subject>, Infallible> {
    Ok(self.subjects.lock().unwrap().get(id).cloned())
  }

  async fn add_subject(&self, id: SubjectId) -> Result<Subject, Infallible> {
    let subject = Subject { subject_id: id.clone(), created_at: Utc::now() };
    self.subjects.lock().unwrap().insert(id, subject.clone());
    Ok(subject)
  }

  async fn find_tasting(
    &self,
    _subject_id: &SubjectId,
    review_id: &str,
  ) -> Result<Option<TastingRecord>, Infallible> {
    Ok(
      self
        .tastings
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.review_id == review_id)
        .cloned(),
    )
  }

  async fn insert_tasting(&self, record: &TastingRecord) -> Result<(), Infallible> {
    self.tastings.lock().unwrap().push(record.clone());
    Ok(())
  }

  async fn update_tasting(&self, record: &TastingRecord) -> Result<(), Infallible> {
    let mut tastings = self.tastings.lock().unwrap();
    if let Some(slot) = tastings.iter_mut().find(|r| r.review_id == record.review_id) {
      *slot = record.clone();
    }
    Ok(())
  }

  async fn list_tastings(
    &self,
    subject_id: &SubjectId,
  ) -> Result<Vec<TastingRecord>, Infallible> {
    let mut records: Vec<TastingRecord> = self
      .tastings
      .lock()
      .unwrap()
      .iter()
      .filter(|r| &r.subject_id == subject_id)
      .cloned()
      .collect();
    records.reverse();
    Ok(records)
  }

  async fn find_curated(
    &self,
    curated_id: &str,
  ) -> Result<Option<CuratedReview>, Infallible> {
    Ok(
      self
        .curated
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.curated_id == curated_id)
        .cloned(),
    )
  }

  async fn insert_curated(&self, review: &CuratedReview) -> Result<(), Infallible> {
    self.curated.lock().unwrap().push(review.clone());
    Ok(())
  }
}
