//! Identity and ownership registry for hinge backends.
//!
//! This crate provides:
//! - [`EntityRegistry`] - Maps entity ids to native objects and records the hierarchy
//! - [`Holder`] - How the registry holds a native object (placeholder, owned, shared)
//! - [`RegistryConfig`] - Policy knobs such as dangling-parent rejection
//!
//! A backend owns one registry. Ids are handed out in strictly increasing
//! order and never reused; id `0` is reserved for the engine's root world,
//! which is reserved as a placeholder by
//! [`EntityRegistry::initiate_engine`] and filled by the first world the
//! backend registers under it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod holder;
pub mod registry;

pub use config::RegistryConfig;
pub use holder::Holder;
pub use registry::EntityRegistry;
