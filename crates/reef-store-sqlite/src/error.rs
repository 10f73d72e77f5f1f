//! Error type for `reef-store-sqlite`.
//!
//! Domain outcomes (id absent, empty payload) are not errors at this layer;
//! absent ids surface as `Ok(None)` from the store methods. Everything here
//! is an infrastructure failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
