//! Schema-free composite data for hinge.
//!
//! This crate provides:
//! - [`Data`] and [`DataTag`] - Storable types and their stable, label-derived keys
//! - [`CompositeData`] - A copyable heterogeneous store holding at most one value per type
//! - [`ExpectData`] - A composite store with dedicated slots for a compile-time list of types
//! - [`DataStore`] - The operations both stores share, for code generic over either
//! - [`DataRegistry`] - Start-up registration that rejects label collisions
//! - [`Diagnosis`] - Write-without-read and read-without-provide reporting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod composite;
mod diagnostics;
mod expect;
mod store;
mod tag;

pub use composite::{CompositeData, DataStatus};
pub use diagnostics::Diagnosis;
pub use expect::{ExpectData, ExpectList, SlotIndex, distinct_count, slot_of};
pub use store::DataStore;
pub use tag::{Data, DataRegistry, DataTag};
