//! Feature composition and entity proxies for hinge.
//!
//! This crate provides:
//! - [`Feature`] and [`declare_feature!`] - Named capabilities with requirements
//! - [`FeatureSet`] - Run-time composition that rejects unmet requirements
//! - [`feature_list!`] - Compile-time feature lists with an aggregate backend interface
//! - [`Implementation`] - The base every backend provides
//! - [`Entity`] - Proxies whose methods come from the features of their list
//! - [`catalog`] - The standard features every backend may provide

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
mod entity;
mod feature;
mod implementation;
mod list;

pub use entity::{
    BoxShape, BoxShapeKind, CapsuleShape, CapsuleShapeKind, Engine, EngineKind, Entity, Joint,
    JointKind, Kind, Link, LinkKind, Model, ModelKind, Shape, ShapeKind, SphereShape,
    SphereShapeKind, World, WorldKind,
};
pub use feature::{
    Feature, FeatureDescriptor, FeatureId, FeatureSet, assert_requirements, find_unmet,
};
pub use implementation::Implementation;
pub use list::{BackendOf, FeatureList, SharedBackend};

#[doc(hidden)]
pub mod __private {
    pub use hinge_foundation::Policy;
    pub use parking_lot::Mutex;
}
