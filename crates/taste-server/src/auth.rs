//! Curator authentication — HTTP Basic credentials checked against the
//! configured shared secret.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use taste_core::{account, store::TastingStore};

use crate::{AppState, error::ApiError};

/// The configured curator secret, supplied by the hosting environment.
#[derive(Clone)]
pub struct CuratorAuth {
  pub password: String,
}

impl CuratorAuth {
  /// Verbatim string comparison of a submitted password; mismatch rejects
  /// and the client may retry.
  pub fn verify(&self, password: &str) -> Result<(), ApiError> {
    if password == self.password {
      Ok(())
    } else {
      Err(ApiError::Unauthorized)
    }
  }
}

/// Zero-size marker: present in a handler means the request carried valid
/// curator credentials.
pub struct Authenticated;

/// Verify `Authorization: Basic` credentials directly from headers.
pub fn verify_auth(headers: &HeaderMap, auth: &CuratorAuth) -> Result<(), ApiError> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(ApiError::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
  let creds = std::str::from_utf8(&decoded).map_err(|_| ApiError::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(ApiError::Unauthorized)?;

  if !account::is_curator(username) {
    return Err(ApiError::Unauthorized);
  }

  auth.verify(password)
}

impl<S> FromRequestParts<AppState<S>> for Authenticated
where
  S: TastingStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    verify_auth(&parts.headers, &state.auth)?;
    Ok(Authenticated)
  }
}
