//! Handler for `POST /session` — username resolution.
//!
//! The reserved curator name branches first and unconditionally; it is the
//! only path that looks at the password.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use taste_core::{
  account::{self, Resolution},
  store::TastingStore,
  subject::{Subject, SubjectId},
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ResolveBody {
  pub username: String,
  #[serde(default)]
  pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolveResponse {
  /// Credentials checked; the caller may submit curated reviews.
  Curator,
  Existing { subject: Subject },
  /// Unknown name — nothing was created. `POST /subjects` is the explicit
  /// confirmation step.
  NeedsConfirmation { subject_id: SubjectId },
}

/// `POST /session` — body: `{"username":"alice"}` (password only for the
/// curator).
pub async fn resolve<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<ResolveBody>,
) -> Result<Json<ResolveResponse>, ApiError>
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  let resolution = account::resolve(state.store.as_ref(), &body.username)
    .await
    .map_err(ApiError::from_account)?;

  match resolution {
    Resolution::Curator => {
      state.auth.verify(body.password.as_deref().unwrap_or_default())?;
      Ok(Json(ResolveResponse::Curator))
    }
    Resolution::Existing(subject) => {
      Ok(Json(ResolveResponse::Existing { subject }))
    }
    Resolution::NeedsConfirmation(subject_id) => {
      Ok(Json(ResolveResponse::NeedsConfirmation { subject_id }))
    }
  }
}
