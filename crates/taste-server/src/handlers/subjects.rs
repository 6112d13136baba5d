//! Handler for `POST /subjects` — the explicit account-creation step.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use taste_core::{account, store::TastingStore, subject::SubjectId};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ConfirmBody {
  pub username: String,
}

/// `POST /subjects` — body: `{"username":"alice"}`.
///
/// Registers the (normalized) username. Idempotent: confirming a name that
/// raced into existence returns the stored subject. The reserved curator
/// name is refused.
pub async fn confirm<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<ConfirmBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  if account::is_curator(&body.username) {
    return Err(ApiError::Validation(taste_core::Error::ReservedUsername(
      body.username.trim().to_lowercase(),
    )));
  }

  let id = SubjectId::new(&body.username).map_err(ApiError::Validation)?;
  let subject = account::confirm(state.store.as_ref(), id)
    .await
    .map_err(ApiError::from_account)?;

  Ok((StatusCode::CREATED, Json(subject)))
}
