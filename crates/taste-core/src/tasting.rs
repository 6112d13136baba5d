//! Tasting records — one user's tasting of one bourbon on one date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  identity::{IdField, derive_id},
  subject::SubjectId,
};

/// Client-submitted tasting fields, before validation and identity
/// derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastingDraft {
  pub date:          NaiveDate,
  pub distillery:    String,
  pub bourbon_name:  String,
  pub proof:         f64,
  pub notes:         String,
  #[serde(default)]
  pub single_barrel: bool,
}

impl TastingDraft {
  /// Reject empty required text fields and out-of-range proof.
  ///
  /// Runs before any write; a failed draft leaves the store untouched.
  pub fn validate(&self) -> Result<()> {
    if self.distillery.trim().is_empty() {
      return Err(Error::EmptyField("distillery"));
    }
    if self.bourbon_name.trim().is_empty() {
      return Err(Error::EmptyField("bourbon_name"));
    }
    if self.notes.trim().is_empty() {
      return Err(Error::EmptyField("notes"));
    }
    if !(0.0..=200.0).contains(&self.proof) {
      return Err(Error::ProofOutOfRange(self.proof));
    }
    Ok(())
  }

  /// Identity over {date, distillery, bourbon_name, proof, notes}.
  ///
  /// `single_barrel` is deliberately excluded: flipping it and resubmitting
  /// the same key fields overwrites the existing record in place.
  pub fn review_id(&self) -> String {
    let date = self.date.to_string();
    derive_id(&[
      IdField::Verbatim(&date),
      IdField::Text(&self.distillery),
      IdField::Text(&self.bourbon_name),
      IdField::Number(self.proof),
      IdField::Text(&self.notes),
    ])
  }

  /// Attach the derived id and owner to produce the persisted form.
  pub fn into_record(self, subject_id: SubjectId) -> TastingRecord {
    let review_id = self.review_id();
    TastingRecord {
      review_id,
      subject_id,
      date: self.date,
      distillery: self.distillery,
      bourbon_name: self.bourbon_name,
      proof: self.proof,
      notes: self.notes,
      single_barrel: self.single_barrel,
    }
  }
}

/// A persisted tasting record. Never deleted; overwritten wholesale when the
/// same identity fields are resubmitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastingRecord {
  pub review_id:     String,
  pub subject_id:    SubjectId,
  pub date:          NaiveDate,
  pub distillery:    String,
  pub bourbon_name:  String,
  pub proof:         f64,
  pub notes:         String,
  #[serde(default)]
  pub single_barrel: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

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

  #[test]
  fn valid_draft_passes() {
    assert_eq!(draft().validate(), Ok(()));
  }

  #[test]
  fn empty_distillery_rejected() {
    let mut d = draft();
    d.distillery = "   ".into();
    assert_eq!(d.validate(), Err(Error::EmptyField("distillery")));
  }

  #[test]
  fn empty_bourbon_name_rejected() {
    let mut d = draft();
    d.bourbon_name = String::new();
    assert_eq!(d.validate(), Err(Error::EmptyField("bourbon_name")));
  }

  #[test]
  fn empty_notes_rejected() {
    let mut d = draft();
    d.notes = String::new();
    assert_eq!(d.validate(), Err(Error::EmptyField("notes")));
  }

  #[test]
  fn proof_out_of_range_rejected() {
    let mut d = draft();
    d.proof = 200.5;
    assert_eq!(d.validate(), Err(Error::ProofOutOfRange(200.5)));
    d.proof = -1.0;
    assert!(d.validate().is_err());
  }

  // The worked example from the log's documentation: only letter case and
  // surrounding whitespace differ, so the two drafts share one identifier.
  #[test]
  fn case_variant_drafts_share_a_review_id() {
    let a = draft();
    let b = TastingDraft {
      date:          a.date,
      distillery:    "buffalo trace".into(),
      bourbon_name:  " eagle rare ".into(),
      proof:         90.0,
      notes:         "smooth".into(),
      single_barrel: true,
    };
    assert_eq!(a.review_id(), b.review_id());
  }

  #[test]
  fn single_barrel_does_not_affect_identity() {
    let a = draft();
    let mut b = draft();
    b.single_barrel = true;
    assert_eq!(a.review_id(), b.review_id());
  }

  #[test]
  fn date_is_part_of_identity() {
    let a = draft();
    let mut b = draft();
    b.date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    assert_ne!(a.review_id(), b.review_id());
  }
}
