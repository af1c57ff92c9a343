//! Encoding and decoding helpers between domain types and the plain values
//! stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings. Booleans are stored as
//! `0` / `1` integers.

use bingo_core::card::Item;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── bool ─────────────────────────────────────────────────────────────────────

pub fn encode_bool(b: bool) -> i64 { i64::from(b) }

pub fn decode_bool(column: &'static str, v: i64) -> Result<bool> {
  match v {
    0 => Ok(false),
    1 => Ok(true),
    value => Err(Error::BadColumn { column, value }),
  }
}

// ─── Raw row structs ─────────────────────────────────────────────────────────

/// A `goal_items` row as it comes out of SQLite.
#[derive(Debug)]
pub struct RawItem {
  pub id:          String,
  pub bingo_id:    String,
  pub content:     String,
  pub is_achieved: i64,
}

impl RawItem {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      bingo_id:    row.get(1)?,
      content:     row.get(2)?,
      is_achieved: row.get(3)?,
    })
  }

  pub fn into_item(self) -> Result<Item> {
    Ok(Item {
      item_id:  decode_uuid(&self.id)?,
      card_id:  decode_uuid(&self.bingo_id)?,
      content:  self.content,
      achieved: decode_bool("is_achieved", self.is_achieved)?,
    })
  }
}
