//! SQL schema for the SQLite tasting store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The derived identifiers are declared PRIMARY KEY, but the upsert routine
/// neither relies on nor handles a uniqueness rejection — the check-then-write
/// race is an accepted gap, not something the schema is trusted to close.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS subjects (
    subject_id  TEXT PRIMARY KEY,   -- normalized lowercase username
    created_at  TEXT NOT NULL       -- ISO 8601 UTC; set once
);

-- One shared table across all users; rows are overwritten in place on
-- identity collision, never deleted.
CREATE TABLE IF NOT EXISTS tastings (
    review_id     TEXT PRIMARY KEY,
    subject_id    TEXT NOT NULL REFERENCES subjects(subject_id),
    date          TEXT NOT NULL,    -- ISO 8601 calendar date
    distillery    TEXT NOT NULL,
    bourbon_name  TEXT NOT NULL,
    proof         REAL NOT NULL,
    notes         TEXT NOT NULL,
    single_barrel INTEGER NOT NULL DEFAULT 0
);

-- Collisions here are rejected at the application layer; rows are
-- write-once.
CREATE TABLE IF NOT EXISTS curated_reviews (
    curated_id    TEXT PRIMARY KEY,
    bourbon_name  TEXT NOT NULL,
    distillery    TEXT NOT NULL,
    proof         REAL NOT NULL,
    review_text   TEXT NOT NULL,
    url           TEXT NOT NULL,
    single_barrel INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS tastings_subject_idx ON tastings(subject_id);
CREATE INDEX IF NOT EXISTS tastings_date_idx    ON tastings(date);

PRAGMA user_version = 1;
";
