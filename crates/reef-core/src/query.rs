//! Derived read operations over the species and taxonomy collections.
//!
//! Every function here is a pure transform of a freshly enumerated `Vec` —
//! linear scan, filter, comparator sort. Nothing is cached and no incremental
//! index is maintained; each call recomputes from scratch. That is a known
//! scaling limit, not a correctness concern, at registry scale.

use serde::{Deserialize, Serialize};

use crate::{specie::MarineSpecie, taxonomy::Taxonomy};

/// Direction for [`sort_by_kingdom`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
  #[default]
  #[serde(rename = "asc")]
  Ascending,
  #[serde(rename = "desc")]
  Descending,
}

// ─── Sorts ───────────────────────────────────────────────────────────────────

/// Stable, case-sensitive lexicographic sort on `taxonomy.kingdom`.
///
/// With no ties, the descending ordering is the exact reverse of the
/// ascending one.
pub fn sort_by_kingdom(
  mut species: Vec<MarineSpecie>,
  order: SortOrder,
) -> Vec<MarineSpecie> {
  match order {
    SortOrder::Ascending => {
      species.sort_by(|a, b| a.taxonomy.kingdom.cmp(&b.taxonomy.kingdom));
    }
    SortOrder::Descending => {
      species.sort_by(|a, b| b.taxonomy.kingdom.cmp(&a.taxonomy.kingdom));
    }
  }
  species
}

/// Stable ascending sort on `created_at`.
pub fn sort_by_creation_time(
  mut species: Vec<MarineSpecie>,
) -> Vec<MarineSpecie> {
  species.sort_by(|a, b| a.created_at.cmp(&b.created_at));
  species
}

// ─── Searches ────────────────────────────────────────────────────────────────

/// Case-insensitive *exact* match against `taxonomy.kingdom` or
/// `taxonomy.phylum`.
pub fn search_by_kingdom_or_phylum(
  mut species: Vec<MarineSpecie>,
  text: &str,
) -> Vec<MarineSpecie> {
  let needle = text.to_lowercase();
  species.retain(|s| {
    s.taxonomy.kingdom.to_lowercase() == needle
      || s.taxonomy.phylum.to_lowercase() == needle
  });
  species
}

/// Case-insensitive substring match on the species `name`.
pub fn search_by_name(
  mut species: Vec<MarineSpecie>,
  text: &str,
) -> Vec<MarineSpecie> {
  let needle = text.to_lowercase();
  species.retain(|s| s.name.to_lowercase().contains(&needle));
  species
}

/// Case-insensitive substring match on `taxonomy.genus`.
pub fn search_by_genus(
  mut species: Vec<MarineSpecie>,
  text: &str,
) -> Vec<MarineSpecie> {
  let needle = text.to_lowercase();
  species.retain(|s| s.taxonomy.genus.to_lowercase().contains(&needle));
  species
}

/// Case-insensitive substring match on `taxon_class`, over the taxonomy
/// collection itself.
pub fn search_taxonomies_by_class(
  mut taxonomies: Vec<Taxonomy>,
  text: &str,
) -> Vec<Taxonomy> {
  let needle = text.to_lowercase();
  taxonomies.retain(|t| t.taxon_class.to_lowercase().contains(&needle));
  taxonomies
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::{Duration, Utc};
  use uuid::Uuid;

  use super::*;

  fn taxonomy(kingdom: &str, phylum: &str, genus: &str) -> Taxonomy {
    let now = Utc::now();
    Taxonomy {
      taxonomy_id: Uuid::new_v4(),
      kingdom: kingdom.into(),
      phylum: phylum.into(),
      taxon_class: "Actinopterygii".into(),
      order: "Perciformes".into(),
      family: "Pomacentridae".into(),
      genus: genus.into(),
      species: "ocellaris".into(),
      created_at: now,
      updated_at: now,
    }
  }

  fn specie(name: &str, kingdom: &str, age_hours: i64) -> MarineSpecie {
    let created = Utc::now() - Duration::hours(age_hours);
    MarineSpecie {
      specie_id: Uuid::new_v4(),
      taxonomy: taxonomy(kingdom, "Chordata", "Amphiprion"),
      name: name.into(),
      description: String::new(),
      created_at: created,
      updated_at: created,
    }
  }

  #[test]
  fn kingdom_sort_ascending() {
    let input = vec![
      specie("b", "Fungi", 0),
      specie("a", "Animalia", 0),
      specie("c", "Plantae", 0),
    ];
    let sorted = sort_by_kingdom(input, SortOrder::Ascending);
    let kingdoms: Vec<_> =
      sorted.iter().map(|s| s.taxonomy.kingdom.as_str()).collect();
    assert_eq!(kingdoms, ["Animalia", "Fungi", "Plantae"]);
  }

  #[test]
  fn kingdom_sort_desc_reverses_asc_without_ties() {
    let input = vec![
      specie("b", "Fungi", 0),
      specie("a", "Animalia", 0),
      specie("c", "Plantae", 0),
    ];
    let asc = sort_by_kingdom(input.clone(), SortOrder::Ascending);
    let desc = sort_by_kingdom(input, SortOrder::Descending);

    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);
  }

  #[test]
  fn kingdom_sort_is_case_sensitive() {
    // Uppercase letters sort before lowercase in lexicographic byte order.
    let input = vec![specie("a", "animalia", 0), specie("b", "Fungi", 0)];
    let sorted = sort_by_kingdom(input, SortOrder::Ascending);
    assert_eq!(sorted[0].taxonomy.kingdom, "Fungi");
  }

  #[test]
  fn creation_time_sort_oldest_first() {
    let input =
      vec![specie("new", "A", 1), specie("old", "B", 48), specie("mid", "C", 12)];
    let sorted = sort_by_creation_time(input);
    let names: Vec<_> = sorted.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["old", "mid", "new"]);
  }

  #[test]
  fn kingdom_or_phylum_search_is_exact_and_case_insensitive() {
    let input = vec![
      specie("match-kingdom", "Animalia", 0),
      specie("no-match", "Fungi", 0),
    ];
    let hits = search_by_kingdom_or_phylum(input.clone(), "animalia");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "match-kingdom");

    // Phylum matches too ("Chordata" in the fixture).
    let hits = search_by_kingdom_or_phylum(input.clone(), "CHORDATA");
    assert_eq!(hits.len(), 2);

    // Substrings do not match.
    let hits = search_by_kingdom_or_phylum(input, "animal");
    assert!(hits.is_empty());
  }

  #[test]
  fn name_search_matches_substring() {
    let input = vec![
      specie("Clownfish", "Animalia", 0),
      specie("Blue Tang", "Animalia", 0),
    ];
    let hits = search_by_name(input, "clown");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Clownfish");
  }

  #[test]
  fn genus_search_matches_substring() {
    let input = vec![specie("a", "Animalia", 0)];
    let hits = search_by_genus(input.clone(), "amphi");
    assert_eq!(hits.len(), 1);
    assert!(search_by_genus(input, "paracanthurus").is_empty());
  }

  #[test]
  fn class_search_over_taxonomies() {
    let input = vec![
      taxonomy("Animalia", "Chordata", "Amphiprion"),
      taxonomy("Animalia", "Cnidaria", "Acropora"),
    ];
    let hits = search_taxonomies_by_class(input, "actino");
    assert_eq!(hits.len(), 2);
  }

  #[test]
  fn searches_are_idempotent() {
    let input = vec![specie("Clownfish", "Animalia", 0)];
    let once = search_by_name(input.clone(), "fish");
    let twice = search_by_name(once.clone(), "fish");
    assert_eq!(once, twice);
  }
}
