//! The store traits and their contracts.
//!
//! Both traits are implemented by storage backends (e.g.
//! `reef-store-sqlite`). Higher layers (`reef-api`, `reef-server`) depend on
//! these abstractions, not on any concrete backend.
//!
//! The two collections are deliberately separate traits: each store
//! exclusively owns its records, and operations that need both (creating a
//! species, re-associating its taxonomy) are composed by the caller as an
//! explicit, non-atomic read-then-write sequence.
//!
//! Methods that address a single record return `Ok(None)` when the id is
//! absent; `Self::Error` is reserved for backend failures. Payload
//! validation happens before the store is reached (see
//! [`crate::taxonomy::NewTaxonomy::validate`]).

use std::future::Future;

use uuid::Uuid;

use crate::{
  specie::{MarineSpecie, NewSpecie, SpeciePatch},
  taxonomy::{NewTaxonomy, Taxonomy, TaxonomyPatch},
};

// ─── TaxonomyStore ───────────────────────────────────────────────────────────

/// An ordered, durable mapping from id to [`Taxonomy`].
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TaxonomyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All taxonomies in insertion order.
  fn list_taxonomies(
    &self,
  ) -> impl Future<Output = Result<Vec<Taxonomy>, Self::Error>> + Send + '_;

  /// Point lookup. Returns `None` if not found.
  fn get_taxonomy(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Taxonomy>, Self::Error>> + Send + '_;

  /// Assign a fresh id, stamp both timestamps to the same instant, persist,
  /// and return the stored record.
  fn add_taxonomy(
    &self,
    input: NewTaxonomy,
  ) -> impl Future<Output = Result<Taxonomy, Self::Error>> + Send + '_;

  /// Merge `patch` over the existing record (absent fields retained), stamp
  /// `updated_at`, persist, and return the result. `None` if `id` is absent.
  fn update_taxonomy(
    &self,
    id: Uuid,
    patch: TaxonomyPatch,
  ) -> impl Future<Output = Result<Option<Taxonomy>, Self::Error>> + Send + '_;

  /// Remove and return the record. `None` if `id` is absent.
  ///
  /// No cascade: species embedding this taxonomy keep their snapshot.
  fn delete_taxonomy(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Taxonomy>, Self::Error>> + Send + '_;
}

// ─── MarineSpecieStore ───────────────────────────────────────────────────────

/// An ordered, durable mapping from id to [`MarineSpecie`].
pub trait MarineSpecieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All species in insertion order.
  fn list_species(
    &self,
  ) -> impl Future<Output = Result<Vec<MarineSpecie>, Self::Error>> + Send + '_;

  /// Point lookup. Returns `None` if not found.
  fn get_specie(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<MarineSpecie>, Self::Error>> + Send + '_;

  /// Persist a new species embedding `taxonomy` as its snapshot. The caller
  /// has already resolved the taxonomy id against a [`TaxonomyStore`]; this
  /// method never reads the taxonomy collection.
  fn add_specie(
    &self,
    taxonomy: Taxonomy,
    input: NewSpecie,
  ) -> impl Future<Output = Result<MarineSpecie, Self::Error>> + Send + '_;

  /// Merge `patch` over name/description, stamp `updated_at`, persist.
  /// `None` if `id` is absent.
  fn update_specie(
    &self,
    id: Uuid,
    patch: SpeciePatch,
  ) -> impl Future<Output = Result<Option<MarineSpecie>, Self::Error>> + Send + '_;

  /// Replace `name` only.
  fn update_specie_name(
    &self,
    id: Uuid,
    name: String,
  ) -> impl Future<Output = Result<Option<MarineSpecie>, Self::Error>> + Send + '_;

  /// Replace `description` only.
  fn update_specie_description(
    &self,
    id: Uuid,
    description: String,
  ) -> impl Future<Output = Result<Option<MarineSpecie>, Self::Error>> + Send + '_;

  /// Remove and return the record. `None` if `id` is absent.
  fn delete_specie(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<MarineSpecie>, Self::Error>> + Send + '_;

  /// Overwrite the embedded taxonomy snapshot with `taxonomy` (the caller's
  /// freshly fetched copy) and stamp `updated_at`.
  ///
  /// Both the "add taxonomy to specie" and "remove taxonomy from specie"
  /// surface operations funnel into this: the legacy "remove" never clears
  /// the field, it replaces it with the given taxonomy's current state. That
  /// behaviour is preserved intentionally.
  fn set_specie_taxonomy(
    &self,
    id: Uuid,
    taxonomy: Taxonomy,
  ) -> impl Future<Output = Result<Option<MarineSpecie>, Self::Error>> + Send + '_;
}
