//! Construction, lookup, and removal through proxies

use hinge_feature::catalog::{DEFAULT_MODEL_NAME, DEFAULT_WORLD_NAME};
use hinge_foundation::EntityId;
use hinge_tpe::{TpeBackend, TpeConfig, TpeEngine};

use crate::scene;

// =============================================================================
// Engine
// =============================================================================

#[test]
fn engine_reports_backend_info() {
    let engine = hinge_tpe::load(TpeConfig::default().with_engine_name("kinematic"), 4).unwrap();
    assert_eq!(engine.name(), "kinematic");
    assert_eq!(engine.index(), 4);
    assert_eq!(engine.id(), EntityId::ROOT);
    assert_eq!(engine.features().unwrap().len(), 22);
}

#[test]
fn first_world_shares_the_engine_id() {
    let engine = TpeEngine::load(TpeBackend::default(), 0).unwrap();
    assert_eq!(engine.world_count(), 0);

    let first = engine.construct_empty_world(DEFAULT_WORLD_NAME).unwrap();
    let second = engine.construct_empty_world("second").unwrap();

    assert_eq!(first.id(), engine.id());
    assert_ne!(second.id(), first.id());
    assert_eq!(engine.world_count(), 2);
    assert_eq!(engine.world_by_name(DEFAULT_WORLD_NAME), Some(first));
    assert_eq!(engine.world_by_index(1), Some(second.clone()));
    assert_eq!(second.index().unwrap(), 1);
}

// =============================================================================
// Hierarchy
// =============================================================================

#[test]
fn parents_follow_construction() {
    let (_engine, world, model, link) = scene();
    assert_eq!(link.model(), Some(model.clone()));
    assert_eq!(model.world(), Some(world.clone()));
    assert_eq!(world.model_by_index(0), Some(model.clone()));
    assert_eq!(model.link_by_name("link"), Some(link));
    assert_eq!(model.name().unwrap(), "model");
}

#[test]
fn indices_count_siblings_of_one_kind() {
    let (_engine, world, _model, _link) = scene();
    let second = world.construct_empty_model(DEFAULT_MODEL_NAME).unwrap();
    let link = second.construct_empty_link("a").unwrap();
    let other = second.construct_empty_link("b").unwrap();

    assert_eq!(second.index().unwrap(), 1);
    assert_eq!(link.index().unwrap(), 0);
    assert_eq!(other.index().unwrap(), 1);
    assert_eq!(world.model_count(), 2);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn removing_by_name_and_index() {
    let (_engine, world, model, link) = scene();
    let keep = world.construct_empty_model("keep").unwrap();
    let dropped = world.construct_empty_model("drop").unwrap();

    assert!(world.remove_model_by_name("drop").unwrap());
    assert!(dropped.is_removed());
    assert!(!world.remove_model_by_name("drop").unwrap());

    assert!(world.remove_model_by_index(0).unwrap());
    assert!(model.is_removed());
    assert!(link.name().is_err());
    assert_eq!(world.model_count(), 1);
    assert_eq!(keep.index().unwrap(), 0);
    assert!(!world.remove_model_by_index(3).unwrap());
}

#[test]
fn removed_model_rejects_further_calls() {
    let (_engine, _world, model, _link) = scene();
    assert!(model.remove().unwrap());
    assert!(!model.remove().unwrap());
    assert!(model.construct_empty_link("late").is_err());
    assert!(model.pose().is_err());
}
