//! Hinge - Vendor-neutral rigid-body physics abstraction
//!
//! This crate re-exports all layers of the hinge system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: hinge_tpe        — Kinematic reference backend
//! Layer 2: hinge_feature    — Features, feature lists, entity proxies, catalog
//! Layer 1: hinge_data       — Composite data, ExpectData fast path
//!          hinge_registry   — Identity and ownership registry
//! Layer 0: hinge_foundation — Core types (EntityId, Error, Policy)
//! ```

pub use hinge_data as data;
pub use hinge_feature as feature;
pub use hinge_foundation as foundation;
pub use hinge_registry as registry;
pub use hinge_tpe as tpe;
