//! Handlers for `/species` CRUD and taxonomy-association endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/species` | All records, insertion order |
//! | `POST`   | `/species` | Body: [`CreateBody`]; 404 if `taxonomy_id` unknown |
//! | `GET`    | `/species/:id` | 404 if not found |
//! | `PATCH`  | `/species/:id` | Body: [`SpeciePatch`]; partial merge |
//! | `PUT`    | `/species/:id/name` | Body: `{"name":"..."}` |
//! | `PUT`    | `/species/:id/description` | Body: `{"description":"..."}` |
//! | `DELETE` | `/species/:id` | Returns the removed record |
//! | `PUT`    | `/species/:id/taxonomy` | Body: [`AssociationBody`] |
//! | `DELETE` | `/species/:id/taxonomy` | Same behaviour as `PUT` (see below) |
//!
//! Creating a species and (re-)associating a taxonomy are two-step,
//! non-atomic protocols: the taxonomy is read from the taxonomy store, then
//! its snapshot is written into the species store. A failure between the two
//! steps leaves the species store untouched.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use reef_core::{
  Error,
  specie::{MarineSpecie, NewSpecie, SpeciePatch},
  store::{MarineSpecieStore, TaxonomyStore},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /species`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<MarineSpecie>>, ApiError>
where
  S: MarineSpecieStore,
{
  let species = store
    .list_species()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(species))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  /// The taxonomy to snapshot into the new record.
  pub taxonomy_id: Uuid,
  #[serde(flatten)]
  pub specie:      NewSpecie,
}

/// `POST /species` — body: `{"taxonomy_id":"...","name":"...","description":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TaxonomyStore + MarineSpecieStore,
{
  body.specie.validate()?;

  // Step 1: resolve the taxonomy. A miss leaves the species store untouched.
  let taxonomy = store
    .get_taxonomy(body.taxonomy_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found(
        "addMarineSpecie",
        Error::TaxonomyNotFound(body.taxonomy_id),
      )
    })?;

  // Step 2: persist the species with the snapshot embedded.
  let specie = store
    .add_specie(taxonomy, body.specie)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(specie)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /species/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: MarineSpecieStore,
{
  let specie = store
    .get_specie(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("getMarineSpecie", Error::SpecieNotFound(id))
    })?;
  Ok(Json(specie))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /species/:id` — body: [`SpeciePatch`]
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(patch): Json<SpeciePatch>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: MarineSpecieStore,
{
  let specie = store
    .update_specie(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("updateMarineSpecie", Error::SpecieNotFound(id))
    })?;
  Ok(Json(specie))
}

#[derive(Debug, Deserialize)]
pub struct NameBody {
  pub name: String,
}

/// `PUT /species/:id/name` — body: `{"name":"..."}`
pub async fn update_name<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<NameBody>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: MarineSpecieStore,
{
  let specie = store
    .update_specie_name(id, body.name)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("updateMarineSpecieName", Error::SpecieNotFound(id))
    })?;
  Ok(Json(specie))
}

#[derive(Debug, Deserialize)]
pub struct DescriptionBody {
  pub description: String,
}

/// `PUT /species/:id/description` — body: `{"description":"..."}`
pub async fn update_description<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<DescriptionBody>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: MarineSpecieStore,
{
  let specie = store
    .update_specie_description(id, body.description)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found(
        "updateMarineSpecieDescription",
        Error::SpecieNotFound(id),
      )
    })?;
  Ok(Json(specie))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /species/:id` — returns the removed record.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: MarineSpecieStore,
{
  let specie = store
    .delete_specie(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("deleteMarineSpecie", Error::SpecieNotFound(id))
    })?;
  Ok(Json(specie))
}

// ─── Association ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AssociationBody {
  pub taxonomy_id: Uuid,
}

/// Fetch the named taxonomy and overwrite the species' embedded snapshot
/// with its current state. `operation` is the external operation name used
/// in error messages.
async fn replace_snapshot<S>(
  store: &S,
  operation: &str,
  specie_id: Uuid,
  taxonomy_id: Uuid,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: TaxonomyStore + MarineSpecieStore,
{
  let taxonomy = store
    .get_taxonomy(taxonomy_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found(operation, Error::TaxonomyNotFound(taxonomy_id))
    })?;

  let specie = store
    .set_specie_taxonomy(specie_id, taxonomy)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found(operation, Error::SpecieNotFound(specie_id))
    })?;
  Ok(Json(specie))
}

/// `PUT /species/:id/taxonomy` — body: `{"taxonomy_id":"..."}`
pub async fn associate_taxonomy<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<AssociationBody>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: TaxonomyStore + MarineSpecieStore,
{
  replace_snapshot(
    store.as_ref(),
    "addTaxonomyToMarineSpecie",
    id,
    body.taxonomy_id,
  )
  .await
}

/// `DELETE /species/:id/taxonomy` — body: `{"taxonomy_id":"..."}`
///
/// Legacy quirk preserved from the original surface: "remove" does not clear
/// the embedded taxonomy, it overwrites it with the given taxonomy's current
/// snapshot — exactly like the `PUT` variant.
pub async fn dissociate_taxonomy<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<AssociationBody>,
) -> Result<Json<MarineSpecie>, ApiError>
where
  S: TaxonomyStore + MarineSpecieStore,
{
  replace_snapshot(
    store.as_ref(),
    "removeTaxonomyFromMarineSpecie",
    id,
    body.taxonomy_id,
  )
  .await
}
