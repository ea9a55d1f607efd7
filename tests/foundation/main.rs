//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: EntityId, Identity, EntityKind, Error, and policies.

mod identity;
mod policies;
