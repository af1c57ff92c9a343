//! Error type for `bingo-server`.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid frontend_url {url:?}: {source}")]
  InvalidOrigin {
    url:    String,
    #[source]
    source: InvalidHeaderValue,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
