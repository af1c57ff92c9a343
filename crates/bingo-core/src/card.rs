//! Card and item model.
//!
//! A card owns exactly [`GOALS_PER_CARD`] items. Both are created together
//! and never updated or deleted afterwards.

use uuid::Uuid;

use crate::{id::new_id, validate::GoalSet};

/// Display label given to every new card.
pub const DEFAULT_TITLE: &str = "マイビンゴ";

/// Number of goals on a card.
pub const GOALS_PER_CARD: usize = 8;

/// Maximum length of a single goal, in characters.
pub const MAX_GOAL_CHARS: usize = 30;

/// A bingo card. Its goals live in separate [`Item`] rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
  pub card_id: Uuid,
  pub title:   String,
}

/// A single goal belonging to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
  pub item_id:  Uuid,
  pub card_id:  Uuid,
  pub content:  String,
  pub achieved: bool,
}

/// A card and its items, ready to be persisted in one transaction.
#[derive(Debug, Clone)]
pub struct NewCard {
  pub card:  Card,
  pub items: Vec<Item>,
}

impl NewCard {
  /// Assign identifiers to a validated goal set.
  ///
  /// The card gets [`DEFAULT_TITLE`]; every item starts un-achieved.
  pub fn new(goals: GoalSet) -> Self {
    let card = Card {
      card_id: new_id(),
      title:   DEFAULT_TITLE.to_owned(),
    };
    let items = goals
      .into_iter()
      .map(|content| Item {
        item_id: new_id(),
        card_id: card.card_id,
        content,
        achieved: false,
      })
      .collect();
    Self { card, items }
  }

  pub fn card_id(&self) -> Uuid { self.card.card_id }
}
