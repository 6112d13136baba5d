//! Handler for `POST /curated` — curator-only review submission.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use taste_core::{
  curated::CuratedDraft,
  store::TastingStore,
  upsert::{self, CuratedOutcome},
};

use crate::{
  AppState,
  auth::Authenticated,
  error::ApiError,
};

/// `POST /curated` — requires curator Basic auth.
///
/// A duplicate identifier is a 409 and nothing is written. A store failure
/// is caught here, logged with the backend's diagnostics, and reported only
/// as a generic "could not save" notice.
pub async fn submit<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Json(draft): Json<CuratedDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  draft.validate().map_err(ApiError::Validation)?;

  match upsert::submit_curated(state.store.as_ref(), draft).await {
    Ok((review, CuratedOutcome::Created)) => {
      Ok((StatusCode::CREATED, Json(review)))
    }
    Ok((_, CuratedOutcome::AlreadyExists)) => {
      Err(ApiError::Conflict("this review already exists".to_string()))
    }
    Err(e) => {
      tracing::error!(error = %e, "curated review write failed");
      Err(ApiError::CuratedSaveFailed)
    }
  }
}
