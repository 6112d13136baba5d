//! Handlers for `/subjects/{id}/tastings` — submission and history.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Serialize;
use taste_core::{
  store::TastingStore,
  subject::SubjectId,
  tasting::{TastingDraft, TastingRecord},
  upsert::{self, UpsertOutcome},
};

use crate::{AppState, error::ApiError};

/// Parse the path segment and require a registered subject.
async fn registered_subject<S>(
  store: &S,
  raw: &str,
) -> Result<SubjectId, ApiError>
where
  S: TastingStore,
{
  let id = SubjectId::new(raw).map_err(ApiError::Validation)?;
  store
    .get_subject(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("subject {id} not found")))?;
  Ok(id)
}

// ─── History ──────────────────────────────────────────────────────────────────

/// `GET /subjects/{id}/tastings` — the subject's log, newest first.
pub async fn history<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<TastingRecord>>, ApiError>
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  let id = registered_subject(state.store.as_ref(), &id).await?;
  let records = state
    .store
    .list_tastings(&id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(records))
}

// ─── Submit ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
  pub outcome: &'static str,
  pub record:  TastingRecord,
}

/// `POST /subjects/{id}/tastings` — validate, then upsert.
///
/// 201 with `"created"` for a first submission; 200 with `"updated"` when
/// the identity fields matched an existing record and it was overwritten.
/// Store failures on this path propagate as-is (500) — only curated writes
/// catch them.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
  Json(draft): Json<TastingDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  let id = registered_subject(state.store.as_ref(), &id).await?;

  draft.validate().map_err(ApiError::Validation)?;

  let (record, outcome) = upsert::upsert_tasting(state.store.as_ref(), &id, draft)
    .await
    .map_err(ApiError::store)?;

  let (status, outcome) = match outcome {
    UpsertOutcome::Created => (StatusCode::CREATED, "created"),
    UpsertOutcome::Updated => (StatusCode::OK, "updated"),
  };

  Ok((status, Json(SubmitResponse { outcome, record })))
}
