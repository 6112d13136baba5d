//! Curated reviews — reviewer-authored notes tied to an external source URL.
//!
//! Unlike tastings, an identity collision here means "already exists": the
//! write is rejected, never turned into an update.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  identity::{IdField, derive_id},
};

/// Curator-submitted review fields, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedDraft {
  pub bourbon_name:  String,
  pub distillery:    String,
  pub proof:         f64,
  pub review_text:   String,
  pub url:           String,
  #[serde(default)]
  pub single_barrel: bool,
}

impl CuratedDraft {
  pub fn validate(&self) -> Result<()> {
    if self.bourbon_name.trim().is_empty() {
      return Err(Error::EmptyField("bourbon_name"));
    }
    if self.distillery.trim().is_empty() {
      return Err(Error::EmptyField("distillery"));
    }
    if self.review_text.trim().is_empty() {
      return Err(Error::EmptyField("review_text"));
    }
    if self.url.trim().is_empty() {
      return Err(Error::EmptyField("url"));
    }
    if !(0.0..=200.0).contains(&self.proof) {
      return Err(Error::ProofOutOfRange(self.proof));
    }
    Ok(())
  }

  /// Identity over {bourbon_name, distillery, proof, review_text, url}.
  ///
  /// `distillery` is hashed verbatim — the original normalized every other
  /// text field here but not this one, and the asymmetry is preserved.
  pub fn curated_id(&self) -> String {
    derive_id(&[
      IdField::Text(&self.bourbon_name),
      IdField::Verbatim(&self.distillery),
      IdField::Number(self.proof),
      IdField::Text(&self.review_text),
      IdField::Text(&self.url),
    ])
  }

  pub fn into_review(self) -> CuratedReview {
    let curated_id = self.curated_id();
    CuratedReview {
      curated_id,
      bourbon_name: self.bourbon_name,
      distillery: self.distillery,
      proof: self.proof,
      review_text: self.review_text,
      url: self.url,
      single_barrel: self.single_barrel,
    }
  }
}

/// A persisted curated review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedReview {
  pub curated_id:    String,
  pub bourbon_name:  String,
  pub distillery:    String,
  pub proof:         f64,
  pub review_text:   String,
  pub url:           String,
  #[serde(default)]
  pub single_barrel: bool,
}
