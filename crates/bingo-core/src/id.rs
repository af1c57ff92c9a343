//! Identifier generation for cards and items.
//!
//! Identifiers are random (v4) UUIDs. The collision probability is low enough
//! that they are inserted as primary keys without a pre-existence check; a
//! collision surfaces as a constraint violation from the store.

use uuid::Uuid;

/// Produce a fresh identifier.
pub fn new_id() -> Uuid { Uuid::new_v4() }
