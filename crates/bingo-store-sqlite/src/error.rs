//! Error type for `bingo-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("unexpected value in column {column}: {value}")]
  BadColumn { column: &'static str, value: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
