//! MarineSpecie — a named species record carrying an embedded taxonomy
//! snapshot.
//!
//! The `taxonomy` field is a denormalized value copy taken when the species
//! is created or explicitly re-associated. It is *not* a foreign key: later
//! edits (or deletion) of the source [`Taxonomy`] do not propagate here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, taxonomy::Taxonomy};

/// A marine species record.
///
/// `specie_id` is store-assigned and immutable; `updated_at` never precedes
/// `created_at`. The embedded `taxonomy` has its own independent lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarineSpecie {
  pub specie_id:   Uuid,
  /// Owned snapshot of the associated taxonomy at association time.
  pub taxonomy:    Taxonomy,
  pub name:        String,
  pub description: String,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

// ─── Input types ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::MarineSpecieStore::add_specie`].
///
/// The taxonomy snapshot is passed separately — resolving the referenced
/// taxonomy id is the caller's job, so that the cross-store read-then-write
/// stays an explicit two-step protocol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSpecie {
  pub name:        Option<String>,
  pub description: Option<String>,
}

impl NewSpecie {
  /// Reject structurally empty payloads.
  pub fn validate(&self) -> Result<()> {
    if self.name.is_none() && self.description.is_none() {
      return Err(Error::InvalidPayload("specie payload has no fields".into()));
    }
    Ok(())
  }

  /// Build the stored record around the given taxonomy snapshot.
  pub fn into_record(
    self,
    specie_id: Uuid,
    taxonomy: Taxonomy,
    now: DateTime<Utc>,
  ) -> MarineSpecie {
    MarineSpecie {
      specie_id,
      taxonomy,
      name: self.name.unwrap_or_default(),
      description: self.description.unwrap_or_default(),
      created_at: now,
      updated_at: now,
    }
  }
}

/// Partial update for [`crate::store::MarineSpecieStore::update_specie`].
/// Only `name` and `description` are patchable; the taxonomy snapshot is
/// replaced through the association operation instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciePatch {
  pub name:        Option<String>,
  pub description: Option<String>,
}
