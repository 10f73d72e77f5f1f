//! JSON REST API for the reef marine-species registry.
//!
//! Exposes an axum [`Router`] backed by any store implementing both
//! [`reef_core::store::TaxonomyStore`] and
//! [`reef_core::store::MarineSpecieStore`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", reef_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod queries;
pub mod species;
pub mod taxonomies;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, put},
};
use reef_core::store::{MarineSpecieStore, TaxonomyStore};

pub use error::ApiError;


/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TaxonomyStore + MarineSpecieStore + Send + Sync + 'static,
{
  Router::new()
    // Taxonomies
    .route(
      "/taxonomies",
      get(taxonomies::list::<S>).post(taxonomies::create::<S>),
    )
    .route("/taxonomies/search/class", get(queries::taxonomies_by_class::<S>))
    .route(
      "/taxonomies/{id}",
      get(taxonomies::get_one::<S>)
        .patch(taxonomies::update_one::<S>)
        .delete(taxonomies::delete_one::<S>),
    )
    // Species
    .route("/species", get(species::list::<S>).post(species::create::<S>))
    .route("/species/sorted/kingdom", get(queries::sorted_by_kingdom::<S>))
    .route("/species/sorted/created", get(queries::sorted_by_creation::<S>))
    .route(
      "/species/search/kingdom-or-phylum",
      get(queries::by_kingdom_or_phylum::<S>),
    )
    .route("/species/search/name", get(queries::by_name::<S>))
    .route("/species/search/genus", get(queries::by_genus::<S>))
    .route(
      "/species/{id}",
      get(species::get_one::<S>)
        .patch(species::update_one::<S>)
        .delete(species::delete_one::<S>),
    )
    .route("/species/{id}/name", put(species::update_name::<S>))
    .route(
      "/species/{id}/description",
      put(species::update_description::<S>),
    )
    .route(
      "/species/{id}/taxonomy",
      put(species::associate_taxonomy::<S>)
        .delete(species::dissociate_taxonomy::<S>),
    )
    .with_state(store)
}
