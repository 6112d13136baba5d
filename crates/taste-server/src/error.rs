//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use taste_core::account::AccountError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("unauthorized")]
  Unauthorized,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("{0}")]
  Validation(taste_core::Error),

  #[error("conflict: {0}")]
  Conflict(String),

  /// Generic notice for a failed curated write; the cause is logged at the
  /// write site and never surfaced to the client.
  #[error("could not save this review")]
  CuratedSaveFailed,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }

  pub(crate) fn from_account<E>(e: AccountError<E>) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    match e {
      AccountError::Invalid(err) => ApiError::Validation(err),
      AccountError::Store(err) => ApiError::store(err),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Unauthorized => {
        let mut res =
          (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Basic realm=\"proof-of-taste\""),
        );
        res
      }
      ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
      ApiError::Validation(e) => {
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
      }
      ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
      ApiError::CuratedSaveFailed => {
        (StatusCode::INTERNAL_SERVER_ERROR, "could not save this review")
          .into_response()
      }
      ApiError::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
