//! Cross-layer integration tests for hinge
//!
//! Drives the reference backend through entity proxies, from engine load to
//! stepping, joints, removal, and extension data.

mod hierarchy;
mod joints;
mod shapes;
mod stepping;
mod threads;

use hinge_tpe::{FeaturePolicy3d, TpeConfig, TpeEngine, TpeFeatures};
use tracing_subscriber::EnvFilter;

pub type World = hinge_feature::World<FeaturePolicy3d, TpeFeatures>;
pub type Model = hinge_feature::Model<FeaturePolicy3d, TpeFeatures>;
pub type Link = hinge_feature::Link<FeaturePolicy3d, TpeFeatures>;

/// Installs a test subscriber once. Set `RUST_LOG=hinge=debug` to see events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An engine with one world holding one model with one link.
pub fn scene() -> (TpeEngine, World, Model, Link) {
    init_tracing();
    let _span = tracing::debug_span!("scene").entered();
    let engine = hinge_tpe::load(TpeConfig::default(), 0).unwrap();
    let world = engine.construct_empty_world("world").unwrap();
    let model = world.construct_empty_model("model").unwrap();
    let link = model.construct_empty_link("link").unwrap();
    tracing::debug!(world = %world.id(), model = %model.id(), link = %link.id(), "built scene");
    (engine, world, model, link)
}
