//! Handlers for `/taxonomies` CRUD endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/taxonomies` | All records, insertion order |
//! | `POST`   | `/taxonomies` | Body: [`NewTaxonomy`]; 400 if empty |
//! | `GET`    | `/taxonomies/:id` | 404 if not found |
//! | `PATCH`  | `/taxonomies/:id` | Body: [`TaxonomyPatch`]; partial merge |
//! | `DELETE` | `/taxonomies/:id` | Returns the removed record |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use reef_core::{
  Error,
  store::TaxonomyStore,
  taxonomy::{NewTaxonomy, Taxonomy, TaxonomyPatch},
};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /taxonomies`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Taxonomy>>, ApiError>
where
  S: TaxonomyStore,
{
  let taxonomies = store
    .list_taxonomies()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(taxonomies))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /taxonomies` — body: [`NewTaxonomy`]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewTaxonomy>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TaxonomyStore,
{
  body.validate()?;
  let taxonomy = store
    .add_taxonomy(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(taxonomy)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /taxonomies/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Taxonomy>, ApiError>
where
  S: TaxonomyStore,
{
  let taxonomy = store
    .get_taxonomy(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("getTaxonomy", Error::TaxonomyNotFound(id))
    })?;
  Ok(Json(taxonomy))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /taxonomies/:id` — body: [`TaxonomyPatch`]
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(patch): Json<TaxonomyPatch>,
) -> Result<Json<Taxonomy>, ApiError>
where
  S: TaxonomyStore,
{
  let taxonomy = store
    .update_taxonomy(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("updateTaxonomy", Error::TaxonomyNotFound(id))
    })?;
  Ok(Json(taxonomy))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /taxonomies/:id` — returns the removed record.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Taxonomy>, ApiError>
where
  S: TaxonomyStore,
{
  let taxonomy = store
    .delete_taxonomy(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::not_found("deleteTaxonomy", Error::TaxonomyNotFound(id))
    })?;
  Ok(Json(taxonomy))
}
