//! Integration tests for `SqliteStore` against an in-memory database.

use reef_core::{
  query,
  specie::{NewSpecie, SpeciePatch},
  store::{MarineSpecieStore, TaxonomyStore},
  taxonomy::{NewTaxonomy, TaxonomyPatch},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn clownfish_taxonomy() -> NewTaxonomy {
  NewTaxonomy {
    kingdom:     Some("Animalia".into()),
    phylum:      Some("Chordata".into()),
    taxon_class: Some("Actinopterygii".into()),
    order:       Some("Perciformes".into()),
    family:      Some("Pomacentridae".into()),
    genus:       Some("Amphiprion".into()),
    species:     Some("ocellaris".into()),
  }
}

fn tang_taxonomy() -> NewTaxonomy {
  NewTaxonomy {
    kingdom:     Some("Animalia".into()),
    phylum:      Some("Chordata".into()),
    taxon_class: Some("Actinopterygii".into()),
    order:       Some("Acanthuriformes".into()),
    family:      Some("Acanthuridae".into()),
    genus:       Some("Paracanthurus".into()),
    species:     Some("hepatus".into()),
  }
}

fn clownfish_specie() -> NewSpecie {
  NewSpecie {
    name:        Some("Clownfish".into()),
    description: Some("Orange with white bands".into()),
  }
}

// ─── Taxonomies ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_taxonomy() {
  let s = store().await;

  let added = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  assert_eq!(added.kingdom, "Animalia");
  assert_eq!(added.created_at, added.updated_at);

  let fetched = s.get_taxonomy(added.taxonomy_id).await.unwrap().unwrap();
  assert_eq!(fetched, added);
}

#[tokio::test]
async fn get_taxonomy_missing_returns_none() {
  let s = store().await;
  let result = s.get_taxonomy(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn repeated_adds_yield_distinct_ids() {
  let s = store().await;
  let a = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let b = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  assert_ne!(a.taxonomy_id, b.taxonomy_id);
}

#[tokio::test]
async fn list_taxonomies_in_insertion_order() {
  let s = store().await;
  let first = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let second = s.add_taxonomy(tang_taxonomy()).await.unwrap();

  let all = s.list_taxonomies().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].taxonomy_id, first.taxonomy_id);
  assert_eq!(all[1].taxonomy_id, second.taxonomy_id);
}

#[tokio::test]
async fn update_taxonomy_merges_partially() {
  let s = store().await;
  let added = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();

  let patch = TaxonomyPatch {
    genus: Some("Premnas".into()),
    species: Some("biaculeatus".into()),
    ..Default::default()
  };
  let updated = s
    .update_taxonomy(added.taxonomy_id, patch)
    .await
    .unwrap()
    .unwrap();

  // Patched fields changed; the rest retained.
  assert_eq!(updated.genus, "Premnas");
  assert_eq!(updated.species, "biaculeatus");
  assert_eq!(updated.kingdom, "Animalia");
  assert_eq!(updated.family, "Pomacentridae");

  // Id immutable, created_at untouched, updated_at moved forward.
  assert_eq!(updated.taxonomy_id, added.taxonomy_id);
  assert_eq!(updated.created_at, added.created_at);
  assert!(updated.updated_at >= updated.created_at);

  // The update is visible to a subsequent get.
  let fetched = s.get_taxonomy(added.taxonomy_id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_taxonomy_missing_returns_none() {
  let s = store().await;
  let result = s
    .update_taxonomy(Uuid::new_v4(), TaxonomyPatch::default())
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_taxonomy_returns_removed_record() {
  let s = store().await;
  let added = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();

  let removed = s.delete_taxonomy(added.taxonomy_id).await.unwrap().unwrap();
  assert_eq!(removed, added);

  assert!(s.get_taxonomy(added.taxonomy_id).await.unwrap().is_none());
  assert!(s.delete_taxonomy(added.taxonomy_id).await.unwrap().is_none());
}

// ─── Species ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_specie_embeds_taxonomy_snapshot() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();

  let specie = s
    .add_specie(taxonomy.clone(), clownfish_specie())
    .await
    .unwrap();

  assert_eq!(specie.taxonomy, taxonomy);
  assert_eq!(specie.name, "Clownfish");
  assert_eq!(specie.created_at, specie.updated_at);

  let fetched = s.get_specie(specie.specie_id).await.unwrap().unwrap();
  assert_eq!(fetched, specie);
}

#[tokio::test]
async fn snapshot_does_not_track_source_taxonomy_edits() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let specie = s
    .add_specie(taxonomy.clone(), clownfish_specie())
    .await
    .unwrap();

  let patch = TaxonomyPatch { kingdom: Some("Fungi".into()), ..Default::default() };
  s.update_taxonomy(taxonomy.taxonomy_id, patch)
    .await
    .unwrap()
    .unwrap();

  let fetched = s.get_specie(specie.specie_id).await.unwrap().unwrap();
  assert_eq!(fetched.taxonomy.kingdom, "Animalia");
}

#[tokio::test]
async fn snapshot_survives_source_taxonomy_deletion() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let specie = s
    .add_specie(taxonomy.clone(), clownfish_specie())
    .await
    .unwrap();

  s.delete_taxonomy(taxonomy.taxonomy_id).await.unwrap().unwrap();

  let fetched = s.get_specie(specie.specie_id).await.unwrap().unwrap();
  assert_eq!(fetched.taxonomy, taxonomy);
}

#[tokio::test]
async fn update_specie_merges_partially() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let specie = s.add_specie(taxonomy, clownfish_specie()).await.unwrap();

  let patch =
    SpeciePatch { description: Some("Lives in anemones".into()), ..Default::default() };
  let updated = s
    .update_specie(specie.specie_id, patch)
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.name, "Clownfish");
  assert_eq!(updated.description, "Lives in anemones");
  assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn single_field_update_variants() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let specie = s.add_specie(taxonomy, clownfish_specie()).await.unwrap();

  let renamed = s
    .update_specie_name(specie.specie_id, "Ocellaris clownfish".into())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(renamed.name, "Ocellaris clownfish");
  assert_eq!(renamed.description, "Orange with white bands");

  let redescribed = s
    .update_specie_description(specie.specie_id, "Reef dweller".into())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(redescribed.name, "Ocellaris clownfish");
  assert_eq!(redescribed.description, "Reef dweller");
}

#[tokio::test]
async fn update_specie_missing_returns_none() {
  let s = store().await;
  let result = s
    .update_specie(Uuid::new_v4(), SpeciePatch::default())
    .await
    .unwrap();
  assert!(result.is_none());

  let result = s
    .update_specie_name(Uuid::new_v4(), "ghost".into())
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_specie_roundtrip() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let specie = s.add_specie(taxonomy, clownfish_specie()).await.unwrap();

  let removed = s.delete_specie(specie.specie_id).await.unwrap().unwrap();
  assert_eq!(removed, specie);
  assert!(s.get_specie(specie.specie_id).await.unwrap().is_none());

  let all = s.list_species().await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn set_specie_taxonomy_overwrites_snapshot() {
  let s = store().await;
  let old = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let new = s.add_taxonomy(tang_taxonomy()).await.unwrap();
  let specie = s.add_specie(old.clone(), clownfish_specie()).await.unwrap();

  let updated = s
    .set_specie_taxonomy(specie.specie_id, new.clone())
    .await
    .unwrap()
    .unwrap();

  // The snapshot now equals the new taxonomy in full, not a cleared value.
  assert_eq!(updated.taxonomy, new);
  assert_ne!(updated.taxonomy.taxonomy_id, old.taxonomy_id);
  assert!(updated.updated_at >= specie.updated_at);
}

#[tokio::test]
async fn set_specie_taxonomy_missing_returns_none() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let result = s
    .set_specie_taxonomy(Uuid::new_v4(), taxonomy)
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Derived reads over a fresh enumeration ──────────────────────────────────

#[tokio::test]
async fn kingdom_or_phylum_search_over_store_contents() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  let specie = s.add_specie(taxonomy, clownfish_specie()).await.unwrap();

  // Case-insensitive exact match, as in the registry's external surface.
  let all = s.list_species().await.unwrap();
  let hits = query::search_by_kingdom_or_phylum(all, "animalia");
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].specie_id, specie.specie_id);
}

#[tokio::test]
async fn repeated_reads_without_mutation_are_identical() {
  let s = store().await;
  let taxonomy = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();
  s.add_specie(taxonomy, clownfish_specie()).await.unwrap();

  let first = s.list_species().await.unwrap();
  let second = s.list_species().await.unwrap();
  assert_eq!(first, second);
}

#[tokio::test]
async fn creation_time_sort_over_store_contents() {
  let s = store().await;
  let t = s.add_taxonomy(clownfish_taxonomy()).await.unwrap();

  let first = s.add_specie(t.clone(), clownfish_specie()).await.unwrap();
  let second = s
    .add_specie(
      t,
      NewSpecie { name: Some("Blue Tang".into()), description: None },
    )
    .await
    .unwrap();

  let sorted = query::sort_by_creation_time(s.list_species().await.unwrap());
  assert_eq!(sorted[0].specie_id, first.specie_id);
  assert_eq!(sorted[1].specie_id, second.specie_id);
}
