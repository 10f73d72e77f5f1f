//! [`SqliteStore`] — the SQLite implementation of both registry store traits.

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use reef_core::{
  specie::{MarineSpecie, NewSpecie, SpeciePatch},
  store::{MarineSpecieStore, TaxonomyStore},
  taxonomy::{NewTaxonomy, Taxonomy, TaxonomyPatch},
};

use crate::{
  Error, Result,
  encode::{RawSpecie, RawTaxonomy, encode_dt, encode_taxonomy, encode_uuid},
  schema::SCHEMA,
};

// ─── Row mappers ─────────────────────────────────────────────────────────────

const TAXONOMY_COLS: &str = "taxonomy_id, kingdom, phylum, taxon_class, \
                             \"order\", family, genus, species, created_at, \
                             updated_at";

const SPECIE_COLS: &str =
  "specie_id, taxonomy_json, name, description, created_at, updated_at";

fn taxonomy_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawTaxonomy> {
  Ok(RawTaxonomy {
    taxonomy_id: row.get(0)?,
    kingdom:     row.get(1)?,
    phylum:      row.get(2)?,
    taxon_class: row.get(3)?,
    order:       row.get(4)?,
    family:      row.get(5)?,
    genus:       row.get(6)?,
    species:     row.get(7)?,
    created_at:  row.get(8)?,
    updated_at:  row.get(9)?,
  })
}

fn specie_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSpecie> {
  Ok(RawSpecie {
    specie_id:     row.get(0)?,
    taxonomy_json: row.get(1)?,
    name:          row.get(2)?,
    description:   row.get(3)?,
    created_at:    row.get(4)?,
    updated_at:    row.get(5)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Both registry stores backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every store
/// method issues exactly one `call` against the connection's dedicated
/// thread, so operations never interleave; sequences that touch both
/// collections are composed (non-atomically) by the caller.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TaxonomyStore impl ──────────────────────────────────────────────────────

impl TaxonomyStore for SqliteStore {
  type Error = Error;

  async fn list_taxonomies(&self) -> Result<Vec<Taxonomy>> {
    let raws: Vec<RawTaxonomy> = self
      .conn
      .call(|conn| {
        let sql = format!("SELECT {TAXONOMY_COLS} FROM taxonomies ORDER BY rowid");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], taxonomy_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTaxonomy::into_taxonomy).collect()
  }

  async fn get_taxonomy(&self, id: Uuid) -> Result<Option<Taxonomy>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawTaxonomy> = self
      .conn
      .call(move |conn| {
        let sql =
          format!("SELECT {TAXONOMY_COLS} FROM taxonomies WHERE taxonomy_id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], taxonomy_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTaxonomy::into_taxonomy).transpose()
  }

  async fn add_taxonomy(&self, input: NewTaxonomy) -> Result<Taxonomy> {
    let record = input.into_record(Uuid::new_v4(), Utc::now());

    let id_str      = encode_uuid(record.taxonomy_id);
    let created_str = encode_dt(record.created_at);
    let updated_str = encode_dt(record.updated_at);
    let fields      = record.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO taxonomies (
             taxonomy_id, kingdom, phylum, taxon_class, \"order\",
             family, genus, species, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            id_str,
            fields.kingdom,
            fields.phylum,
            fields.taxon_class,
            fields.order,
            fields.family,
            fields.genus,
            fields.species,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn update_taxonomy(
    &self,
    id: Uuid,
    patch: TaxonomyPatch,
  ) -> Result<Option<Taxonomy>> {
    let id_str      = encode_uuid(id);
    let updated_str = encode_dt(Utc::now());

    // Merge in SQL: COALESCE keeps the stored value for absent patch fields.
    // The UPDATE and the readback share one `call`, so the operation is
    // atomic with respect to other store operations.
    let raw: Option<RawTaxonomy> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE taxonomies SET
             kingdom     = COALESCE(?2, kingdom),
             phylum      = COALESCE(?3, phylum),
             taxon_class = COALESCE(?4, taxon_class),
             \"order\"   = COALESCE(?5, \"order\"),
             family      = COALESCE(?6, family),
             genus       = COALESCE(?7, genus),
             species     = COALESCE(?8, species),
             updated_at  = ?9
           WHERE taxonomy_id = ?1",
          rusqlite::params![
            id_str,
            patch.kingdom,
            patch.phylum,
            patch.taxon_class,
            patch.order,
            patch.family,
            patch.genus,
            patch.species,
            updated_str,
          ],
        )?;

        if changed == 0 {
          return Ok(None);
        }

        let sql =
          format!("SELECT {TAXONOMY_COLS} FROM taxonomies WHERE taxonomy_id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], taxonomy_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTaxonomy::into_taxonomy).transpose()
  }

  async fn delete_taxonomy(&self, id: Uuid) -> Result<Option<Taxonomy>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawTaxonomy> = self
      .conn
      .call(move |conn| {
        let sql =
          format!("SELECT {TAXONOMY_COLS} FROM taxonomies WHERE taxonomy_id = ?1");
        let existing = conn
          .query_row(&sql, rusqlite::params![id_str], taxonomy_row)
          .optional()?;

        if existing.is_some() {
          conn.execute(
            "DELETE FROM taxonomies WHERE taxonomy_id = ?1",
            rusqlite::params![id_str],
          )?;
        }

        Ok(existing)
      })
      .await?;

    raw.map(RawTaxonomy::into_taxonomy).transpose()
  }
}

// ─── MarineSpecieStore impl ──────────────────────────────────────────────────

impl MarineSpecieStore for SqliteStore {
  type Error = Error;

  async fn list_species(&self) -> Result<Vec<MarineSpecie>> {
    let raws: Vec<RawSpecie> = self
      .conn
      .call(|conn| {
        let sql = format!("SELECT {SPECIE_COLS} FROM species ORDER BY rowid");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], specie_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSpecie::into_specie).collect()
  }

  async fn get_specie(&self, id: Uuid) -> Result<Option<MarineSpecie>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSpecie> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {SPECIE_COLS} FROM species WHERE specie_id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], specie_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSpecie::into_specie).transpose()
  }

  async fn add_specie(
    &self,
    taxonomy: Taxonomy,
    input: NewSpecie,
  ) -> Result<MarineSpecie> {
    let record = input.into_record(Uuid::new_v4(), taxonomy, Utc::now());

    let id_str        = encode_uuid(record.specie_id);
    let taxonomy_json = encode_taxonomy(&record.taxonomy)?;
    let name          = record.name.clone();
    let description   = record.description.clone();
    let created_str   = encode_dt(record.created_at);
    let updated_str   = encode_dt(record.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO species (
             specie_id, taxonomy_json, name, description, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            taxonomy_json,
            name,
            description,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn update_specie(
    &self,
    id: Uuid,
    patch: SpeciePatch,
  ) -> Result<Option<MarineSpecie>> {
    let id_str      = encode_uuid(id);
    let updated_str = encode_dt(Utc::now());

    let raw: Option<RawSpecie> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE species SET
             name        = COALESCE(?2, name),
             description = COALESCE(?3, description),
             updated_at  = ?4
           WHERE specie_id = ?1",
          rusqlite::params![id_str, patch.name, patch.description, updated_str],
        )?;

        if changed == 0 {
          return Ok(None);
        }

        let sql = format!("SELECT {SPECIE_COLS} FROM species WHERE specie_id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], specie_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSpecie::into_specie).transpose()
  }

  async fn update_specie_name(
    &self,
    id: Uuid,
    name: String,
  ) -> Result<Option<MarineSpecie>> {
    let patch = SpeciePatch { name: Some(name), description: None };
    self.update_specie(id, patch).await
  }

  async fn update_specie_description(
    &self,
    id: Uuid,
    description: String,
  ) -> Result<Option<MarineSpecie>> {
    let patch = SpeciePatch { name: None, description: Some(description) };
    self.update_specie(id, patch).await
  }

  async fn delete_specie(&self, id: Uuid) -> Result<Option<MarineSpecie>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSpecie> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {SPECIE_COLS} FROM species WHERE specie_id = ?1");
        let existing = conn
          .query_row(&sql, rusqlite::params![id_str], specie_row)
          .optional()?;

        if existing.is_some() {
          conn.execute(
            "DELETE FROM species WHERE specie_id = ?1",
            rusqlite::params![id_str],
          )?;
        }

        Ok(existing)
      })
      .await?;

    raw.map(RawSpecie::into_specie).transpose()
  }

  async fn set_specie_taxonomy(
    &self,
    id: Uuid,
    taxonomy: Taxonomy,
  ) -> Result<Option<MarineSpecie>> {
    let id_str        = encode_uuid(id);
    let taxonomy_json = encode_taxonomy(&taxonomy)?;
    let updated_str   = encode_dt(Utc::now());

    let raw: Option<RawSpecie> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE species SET taxonomy_json = ?2, updated_at = ?3
           WHERE specie_id = ?1",
          rusqlite::params![id_str, taxonomy_json, updated_str],
        )?;

        if changed == 0 {
          return Ok(None);
        }

        let sql = format!("SELECT {SPECIE_COLS} FROM species WHERE specie_id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], specie_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSpecie::into_specie).transpose()
  }
}
