//! SQL schema for the reef SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS taxonomies (
    taxonomy_id TEXT PRIMARY KEY,
    kingdom     TEXT NOT NULL,
    phylum      TEXT NOT NULL,
    taxon_class TEXT NOT NULL,
    "order"     TEXT NOT NULL,
    family      TEXT NOT NULL,
    genus       TEXT NOT NULL,
    species     TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

-- Each species embeds its taxonomy as a JSON value snapshot taken at
-- association time. There is deliberately no foreign key to taxonomies:
-- deleting a taxonomy leaves every snapshot intact.
CREATE TABLE IF NOT EXISTS species (
    specie_id     TEXT PRIMARY KEY,
    taxonomy_json TEXT NOT NULL,  -- JSON-encoded Taxonomy snapshot
    name          TEXT NOT NULL,
    description   TEXT NOT NULL,
    created_at    TEXT NOT NULL,
    updated_at    TEXT NOT NULL
);

PRAGMA user_version = 1;
"#;
