//! Identities, errors, and numeric policies for hinge.
//!
//! This crate provides:
//! - [`EntityId`] and [`Identity`] - Opaque handles naming entities inside a backend
//! - [`EntityKind`] - The kinds of entity in the world/model/link/shape hierarchy
//! - [`Error`] - Rich error types with context
//! - [`Policy`] - Dimensionality and scalar precision of a feature set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod policy;

pub use entity::{EntityId, EntityKind, Identity};
pub use error::{Error, ErrorContext, ErrorKind};
pub use policy::{
    FeaturePolicy2d, FeaturePolicy2f, FeaturePolicy3d, FeaturePolicy3f, Policy, Scalar,
};

/// Result alias used throughout hinge.
pub type Result<T> = std::result::Result<T, Error>;
