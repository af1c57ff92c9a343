//! The `CardStore` trait.
//!
//! Implemented by storage backends (e.g. `bingo-store-sqlite`). The HTTP
//! layer depends on this abstraction, so handlers can be exercised against a
//! test double as easily as against a real database.

use std::future::Future;

use uuid::Uuid;

use crate::card::{Item, NewCard};

/// Abstraction over a transactional card store.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a card and all of its items atomically, returning the card id.
  ///
  /// Either every row is written or none is. On error the caller must treat
  /// the card as not created.
  fn create_card(
    &self,
    card: NewCard,
  ) -> impl Future<Output = Result<Uuid, Self::Error>> + Send + '_;

  /// Return the items belonging to `card_id`.
  ///
  /// An unknown card yields an empty list, not an error. Order is whatever
  /// the backend returns and carries no meaning.
  fn fetch_items_by_card(
    &self,
    card_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;
}
