//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings, calendar dates are `YYYY-MM-DD`, and
//! booleans are 0/1 integers.

use chrono::{DateTime, NaiveDate, Utc};
use taste_core::{
  curated::CuratedReview,
  subject::{Subject, SubjectId},
  tasting::TastingRecord,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String {
  d.to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse().map_err(|e: chrono::ParseError| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `subjects` row.
pub struct RawSubject {
  pub subject_id: String,
  pub created_at: String,
}

impl RawSubject {
  pub fn into_subject(self) -> Result<Subject> {
    Ok(Subject {
      subject_id: SubjectId::new(&self.subject_id)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `tastings` row.
pub struct RawTasting {
  pub review_id:     String,
  pub subject_id:    String,
  pub date:          String,
  pub distillery:    String,
  pub bourbon_name:  String,
  pub proof:         f64,
  pub notes:         String,
  pub single_barrel: i64,
}

impl RawTasting {
  pub fn into_record(self) -> Result<TastingRecord> {
    Ok(TastingRecord {
      review_id:     self.review_id,
      subject_id:    SubjectId::new(&self.subject_id)?,
      date:          decode_date(&self.date)?,
      distillery:    self.distillery,
      bourbon_name:  self.bourbon_name,
      proof:         self.proof,
      notes:         self.notes,
      single_barrel: self.single_barrel != 0,
    })
  }
}

/// Raw values read directly from a `curated_reviews` row.
pub struct RawCurated {
  pub curated_id:    String,
  pub bourbon_name:  String,
  pub distillery:    String,
  pub proof:         f64,
  pub review_text:   String,
  pub url:           String,
  pub single_barrel: i64,
}

impl RawCurated {
  pub fn into_review(self) -> CuratedReview {
    CuratedReview {
      curated_id:    self.curated_id,
      bourbon_name:  self.bourbon_name,
      distillery:    self.distillery,
      proof:         self.proof,
      review_text:   self.review_text,
      url:           self.url,
      single_barrel: self.single_barrel != 0,
    }
  }
}
