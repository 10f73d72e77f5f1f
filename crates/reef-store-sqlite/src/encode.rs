//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. The embedded taxonomy
//! snapshot is stored as compact JSON. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, Utc};
use reef_core::{specie::MarineSpecie, taxonomy::Taxonomy};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Taxonomy snapshot ───────────────────────────────────────────────────────

/// Serialise a taxonomy for the `taxonomy_json` column. The snapshot carries
/// its own id and timestamps; decoding yields an owned value copy per row.
pub fn encode_taxonomy(t: &Taxonomy) -> Result<String> {
  Ok(serde_json::to_string(t)?)
}

pub fn decode_taxonomy(s: &str) -> Result<Taxonomy> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// A `taxonomies` row as raw column text, before decoding.
pub struct RawTaxonomy {
  pub taxonomy_id: String,
  pub kingdom:     String,
  pub phylum:      String,
  pub taxon_class: String,
  pub order:       String,
  pub family:      String,
  pub genus:       String,
  pub species:     String,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawTaxonomy {
  pub fn into_taxonomy(self) -> Result<Taxonomy> {
    Ok(Taxonomy {
      taxonomy_id: Uuid::parse_str(&self.taxonomy_id)?,
      kingdom: self.kingdom,
      phylum: self.phylum,
      taxon_class: self.taxon_class,
      order: self.order,
      family: self.family,
      genus: self.genus,
      species: self.species,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// A `species` row as raw column text, before decoding.
pub struct RawSpecie {
  pub specie_id:     String,
  pub taxonomy_json: String,
  pub name:          String,
  pub description:   String,
  pub created_at:    String,
  pub updated_at:    String,
}

impl RawSpecie {
  pub fn into_specie(self) -> Result<MarineSpecie> {
    Ok(MarineSpecie {
      specie_id: Uuid::parse_str(&self.specie_id)?,
      taxonomy: decode_taxonomy(&self.taxonomy_json)?,
      name: self.name,
      description: self.description,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
