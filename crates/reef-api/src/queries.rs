//! Handlers for the derived sorted/filtered read endpoints.
//!
//! Each endpoint enumerates its store afresh and applies the pure functions
//! from [`reef_core::query`]. Nothing is cached between calls; the handlers
//! are idempotent reads.
//!
//! | Path | Operation |
//! |------|-----------|
//! | `GET /species/sorted/kingdom?order=asc\|desc` | stable lexicographic sort |
//! | `GET /species/sorted/created` | ascending creation time |
//! | `GET /species/search/kingdom-or-phylum?q=` | case-insensitive exact match |
//! | `GET /species/search/name?q=` | case-insensitive substring |
//! | `GET /species/search/genus?q=` | case-insensitive substring |
//! | `GET /taxonomies/search/class?q=` | case-insensitive substring |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use reef_core::{
  query::{self, SortOrder},
  specie::MarineSpecie,
  store::{MarineSpecieStore, TaxonomyStore},
  taxonomy::Taxonomy,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct SortParams {
  #[serde(default)]
  pub order: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  /// The search text.
  pub q: String,
}

// ─── Sorts ───────────────────────────────────────────────────────────────────

/// `GET /species/sorted/kingdom[?order=asc|desc]`
pub async fn sorted_by_kingdom<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SortParams>,
) -> Result<Json<Vec<MarineSpecie>>, ApiError>
where
  S: MarineSpecieStore,
{
  let species = store
    .list_species()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(query::sort_by_kingdom(species, params.order)))
}

/// `GET /species/sorted/created`
pub async fn sorted_by_creation<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<MarineSpecie>>, ApiError>
where
  S: MarineSpecieStore,
{
  let species = store
    .list_species()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(query::sort_by_creation_time(species)))
}

// ─── Searches ────────────────────────────────────────────────────────────────

/// `GET /species/search/kingdom-or-phylum?q=<text>`
pub async fn by_kingdom_or_phylum<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MarineSpecie>>, ApiError>
where
  S: MarineSpecieStore,
{
  let species = store
    .list_species()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(query::search_by_kingdom_or_phylum(species, &params.q)))
}

/// `GET /species/search/name?q=<text>`
pub async fn by_name<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MarineSpecie>>, ApiError>
where
  S: MarineSpecieStore,
{
  let species = store
    .list_species()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(query::search_by_name(species, &params.q)))
}

/// `GET /species/search/genus?q=<text>`
pub async fn by_genus<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MarineSpecie>>, ApiError>
where
  S: MarineSpecieStore,
{
  let species = store
    .list_species()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(query::search_by_genus(species, &params.q)))
}

/// `GET /taxonomies/search/class?q=<text>`
pub async fn taxonomies_by_class<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Taxonomy>>, ApiError>
where
  S: TaxonomyStore,
{
  let taxonomies = store
    .list_taxonomies()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(query::search_taxonomies_by_class(
    taxonomies,
    &params.q,
  )))
}
