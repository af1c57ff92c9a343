//! SQL schema for the bingo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS bingos (
    id     TEXT PRIMARY KEY,
    title  TEXT NOT NULL
);

-- Written once alongside the owning card; never updated or deleted here.
CREATE TABLE IF NOT EXISTS goal_items (
    id           TEXT PRIMARY KEY,
    bingo_id     TEXT NOT NULL REFERENCES bingos(id),
    content      TEXT NOT NULL,
    is_achieved  INTEGER NOT NULL DEFAULT 0   -- 0 | 1
);

CREATE INDEX IF NOT EXISTS goal_items_bingo_idx ON goal_items(bingo_id);

PRAGMA user_version = 1;
";
