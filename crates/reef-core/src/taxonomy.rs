//! Taxonomy — a standalone biological classification record.
//!
//! Taxonomies live in their own store. Marine species embed a *copy* of a
//! taxonomy at association time (see [`crate::specie`]); deleting or editing
//! a taxonomy never touches those snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// A biological classification record, kingdom down to species epithet.
///
/// `taxonomy_id` is store-assigned and immutable. Both timestamps are
/// server-assigned RFC 3339 UTC instants; `updated_at` never precedes
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
  pub taxonomy_id: Uuid,
  pub kingdom:     String,
  pub phylum:      String,
  /// `class` is a reserved notion in too many contexts; the column and the
  /// JSON field are both spelled `taxon_class`.
  pub taxon_class: String,
  pub order:       String,
  pub family:      String,
  pub genus:       String,
  pub species:     String,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

// ─── Input types ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::TaxonomyStore::add_taxonomy`].
///
/// `taxonomy_id` and the timestamps are always set by the store; they are not
/// accepted from callers. Individual fields may be omitted (they default to
/// the empty string), but a payload with *every* field absent is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTaxonomy {
  pub kingdom:     Option<String>,
  pub phylum:      Option<String>,
  pub taxon_class: Option<String>,
  pub order:       Option<String>,
  pub family:      Option<String>,
  pub genus:       Option<String>,
  pub species:     Option<String>,
}

impl NewTaxonomy {
  /// Reject structurally empty payloads.
  pub fn validate(&self) -> Result<()> {
    let all_absent = self.kingdom.is_none()
      && self.phylum.is_none()
      && self.taxon_class.is_none()
      && self.order.is_none()
      && self.family.is_none()
      && self.genus.is_none()
      && self.species.is_none();
    if all_absent {
      return Err(Error::InvalidPayload(
        "taxonomy payload has no fields".into(),
      ));
    }
    Ok(())
  }

  /// Build the stored record. The store supplies the id and the creation
  /// instant; both timestamps start equal.
  pub fn into_record(self, taxonomy_id: Uuid, now: DateTime<Utc>) -> Taxonomy {
    Taxonomy {
      taxonomy_id,
      kingdom: self.kingdom.unwrap_or_default(),
      phylum: self.phylum.unwrap_or_default(),
      taxon_class: self.taxon_class.unwrap_or_default(),
      order: self.order.unwrap_or_default(),
      family: self.family.unwrap_or_default(),
      genus: self.genus.unwrap_or_default(),
      species: self.species.unwrap_or_default(),
      created_at: now,
      updated_at: now,
    }
  }
}

/// Partial update for [`crate::store::TaxonomyStore::update_taxonomy`].
/// Absent fields are retained unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomyPatch {
  pub kingdom:     Option<String>,
  pub phylum:      Option<String>,
  pub taxon_class: Option<String>,
  pub order:       Option<String>,
  pub family:      Option<String>,
  pub genus:       Option<String>,
  pub species:     Option<String>,
}
