//! Kinematic reference backend for hinge.
//!
//! This crate provides:
//! - [`TpeBackend`] - A backend implementing every catalog feature for [`FeaturePolicy3d`]
//! - [`TpeFeatures`] - The feature list naming the whole catalog
//! - [`TpeConfig`] - Engine name, default step and registry settings
//! - [`TpeEntity`] and friends - The native objects behind each id
//!
//! Models carry a pose and a linear velocity; stepping a world moves each
//! model along its velocity. There are no forces and no contacts.
//!
//! ```rust
//! use hinge_feature::catalog::CapsuleParams;
//! use hinge_tpe::{TpeConfig, load};
//!
//! let engine = load(TpeConfig::default(), 0).unwrap();
//! let world = engine.construct_empty_world("world").unwrap();
//! let model = world.construct_empty_model("model").unwrap();
//! let link = model.construct_empty_link("link").unwrap();
//! let capsule = link.attach_capsule_shape(CapsuleParams::new(2.0, 3.0)).unwrap();
//! assert_eq!(capsule.radius().unwrap(), 2.0);
//! assert_eq!(capsule.height().unwrap(), 3.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod backend;
mod config;
mod features;
mod native;

pub use backend::TpeBackend;
pub use config::TpeConfig;
pub use features::{TpeFeatures, TpeInterface};
pub use native::{Geometry, TpeEntity, TpeJoint, TpeLink, TpeModel, TpeShape, TpeWorld};

use hinge_feature::Engine;
pub use hinge_foundation::FeaturePolicy3d;
use hinge_foundation::Result;

/// An engine proxy served by the reference backend.
pub type TpeEngine = Engine<FeaturePolicy3d, TpeFeatures>;

/// Loads a reference engine.
///
/// # Errors
///
/// Never in practice: the backend always answers with a valid identity.
pub fn load(config: TpeConfig, engine_id: usize) -> Result<TpeEngine> {
    TpeEngine::load(TpeBackend::new(config), engine_id)
}
