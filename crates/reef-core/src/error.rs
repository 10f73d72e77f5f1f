//! Error types for `reef-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("taxonomy not found: {0}")]
  TaxonomyNotFound(Uuid),

  #[error("marine specie not found: {0}")]
  SpecieNotFound(Uuid),

  /// A create payload with no usable fields (or otherwise malformed input).
  #[error("invalid payload: {0}")]
  InvalidPayload(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
