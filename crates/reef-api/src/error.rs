//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// A 404 whose message names the external operation alongside the missing
  /// id, e.g. `getTaxonomy: taxonomy not found: <id>`.
  pub fn not_found(operation: &str, source: reef_core::Error) -> Self {
    ApiError::NotFound(format!("{operation}: {source}"))
  }
}

/// Domain outcomes map onto client-facing statuses; everything else is a
/// backend failure (500).
impl From<reef_core::Error> for ApiError {
  fn from(e: reef_core::Error) -> Self {
    use reef_core::Error as E;
    match e {
      E::TaxonomyNotFound(_) | E::SpecieNotFound(_) => {
        ApiError::NotFound(e.to_string())
      }
      E::InvalidPayload(_) => ApiError::BadRequest(e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
