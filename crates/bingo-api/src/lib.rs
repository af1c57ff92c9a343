//! JSON HTTP API for the bingo goal service.
//!
//! Exposes an axum [`Router`] backed by any [`bingo_core::store::CardStore`].
//! CORS, tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = bingo_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod goals;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use bingo_core::store::CardStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// Each path accepts a single method; anything else is answered with
/// `405 Method Not Allowed` before the handler runs.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CardStore + 'static,
{
  Router::new()
    .route("/api/goals", get(goals::list::<S>))
    .route("/api/createGoals", post(goals::create::<S>))
    .with_state(store)
}
