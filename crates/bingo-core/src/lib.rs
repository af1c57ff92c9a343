//! Core types and trait definitions for the bingo goal service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! It holds the card model, request validation, identifier generation, and
//! the [`CardStore`](store::CardStore) abstraction the other crates build on.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod card;
pub mod error;
pub mod id;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
