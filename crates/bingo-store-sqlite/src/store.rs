//! [`SqliteStore`] — the SQLite implementation of [`CardStore`].

use std::path::Path;

use bingo_core::{
  card::{Item, NewCard},
  store::CardStore,
};
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawItem, encode_bool, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A card store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
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

// ─── CardStore impl ──────────────────────────────────────────────────────────

impl CardStore for SqliteStore {
  type Error = Error;

  async fn create_card(&self, card: NewCard) -> Result<Uuid> {
    let card_id     = card.card_id();
    let card_id_str = encode_uuid(card_id);
    let title       = card.card.title;
    let items: Vec<(String, String, String, i64)> = card
      .items
      .into_iter()
      .map(|item| {
        (
          encode_uuid(item.item_id),
          encode_uuid(item.card_id),
          item.content,
          encode_bool(item.achieved),
        )
      })
      .collect();

    // One transaction for the card and all of its items. Returning early
    // drops `tx` uncommitted, which rolls everything back.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO bingos (id, title) VALUES (?1, ?2)",
          rusqlite::params![card_id_str, title],
        )?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO goal_items (id, bingo_id, content, is_achieved)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for (id, bingo_id, content, achieved) in &items {
            stmt.execute(rusqlite::params![id, bingo_id, content, achieved])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::debug!(%card_id, "card committed");
    Ok(card_id)
  }

  async fn fetch_items_by_card(&self, card_id: Uuid) -> Result<Vec<Item>> {
    let card_id_str = encode_uuid(card_id);

    let rows: Vec<rusqlite::Result<RawItem>> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, bingo_id, content, is_achieved
           FROM goal_items
           WHERE bingo_id = ?1",
        )?;
        let mut rows = stmt.query(rusqlite::params![card_id_str])?;

        // Step errors abort the read; per-row mapping errors are kept so
        // the row can be skipped below.
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
          out.push(RawItem::from_row(row));
        }
        Ok(out)
      })
      .await?;

    let items = rows
      .into_iter()
      .filter_map(|row| {
        let decoded = row
          .map_err(|e| Error::Database(e.into()))
          .and_then(RawItem::into_item);
        match decoded {
          Ok(item) => Some(item),
          Err(error) => {
            tracing::warn!(%card_id, %error, "skipping undecodable goal item");
            None
          }
        }
      })
      .collect();

    Ok(items)
  }
}
