//! Error types for `bingo-core`.

use thiserror::Error;

use crate::validate::Violations;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid goals: {0}")]
  InvalidGoals(#[from] Violations),

  #[error("bingoId is required")]
  MissingCardId,

  #[error("bingoId is not a valid UUID: {0:?}")]
  MalformedCardId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
