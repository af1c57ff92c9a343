//! Handlers for the goal endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/goals` | `?bingoId` required; returns `[{"bingoId","goal"}]` |
//! | `POST` | `/api/createGoals` | Body: `{"goals":[...]}` with 8 goals; returns `{"bingoId"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use bingo_core::{
  card::{Item, NewCard},
  store::CardStore,
  validate::{GoalSet, parse_card_id},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(rename = "bingoId")]
  pub bingo_id: Option<String>,
}

/// One goal as returned by `GET /api/goals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRow {
  pub bingo_id: Uuid,
  pub goal:     String,
}

impl From<Item> for GoalRow {
  fn from(item: Item) -> Self {
    Self {
      bingo_id: item.card_id,
      goal:     item.content,
    }
  }
}

/// `GET /api/goals?bingoId=<id>`
///
/// An unknown id is not an error: the response is an empty array.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<GoalRow>>, ApiError>
where
  S: CardStore,
{
  let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let card_id = parse_card_id(params.bingo_id.as_deref()).inspect_err(|e| {
    tracing::warn!(error = %e, "rejected goals query");
  })?;

  let items = store
    .fetch_items_by_card(card_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(items.into_iter().map(GoalRow::from).collect()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /api/createGoals`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
  pub bingo_id: Uuid,
}

/// `POST /api/createGoals`
///
/// The body is parsed by hand rather than through [`Json`] so that every
/// malformed payload, whatever its content type, is a plain 400.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Json<Created>, ApiError>
where
  S: CardStore,
{
  let body: CreateBody = serde_json::from_slice(&body)
    .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?;

  let goals = GoalSet::parse(body.goals).map_err(|violations| {
    tracing::warn!(%violations, "rejected goal set");
    bingo_core::Error::from(violations)
  })?;

  let card_id = store
    .create_card(NewCard::new(goals))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(%card_id, "card created");
  Ok(Json(Created { bingo_id: card_id }))
}
