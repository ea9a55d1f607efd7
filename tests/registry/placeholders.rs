//! Root reservation and backfill tests

use std::sync::Arc;

use hinge_foundation::{EntityId, EntityKind, ErrorKind};
use hinge_registry::{EntityRegistry, Holder, RegistryConfig};

#[derive(Debug, PartialEq)]
enum Native {
    World(&'static str),
    Model(&'static str),
}

#[test]
fn initiate_engine_reserves_root_placeholder() {
    let mut registry = EntityRegistry::<Native>::default();
    let engine = registry.initiate_engine();

    assert_eq!(engine.id(), EntityId::ROOT);
    assert!(registry.find(EntityId::ROOT).unwrap().is_placeholder());
    assert!(registry.get(EntityId::ROOT).is_none());
    assert_eq!(registry.initiate_engine(), engine);
    assert_eq!(registry.len(), 1);
}

#[test]
fn first_world_backfills_root() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();

    let world = registry
        .register_owned(Some(EntityId::ROOT), EntityKind::World, Native::World("w"))
        .unwrap();

    assert_eq!(world.id(), EntityId::ROOT);
    assert_eq!(registry.get(EntityId::ROOT), Some(&Native::World("w")));
    assert_eq!(registry.len(), 1);
}

#[test]
fn second_world_gets_fresh_id() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    registry
        .register_owned(Some(EntityId::ROOT), EntityKind::World, Native::World("a"))
        .unwrap();
    let second = registry
        .register_owned(Some(EntityId::ROOT), EntityKind::World, Native::World("b"))
        .unwrap();

    assert_ne!(second.id(), EntityId::ROOT);
    assert_eq!(registry.parent_of(second.id()), Some(EntityId::ROOT));
}

#[test]
fn different_kind_does_not_fill_placeholder() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let model = registry
        .register_owned(Some(EntityId::ROOT), EntityKind::Model, Native::Model("m"))
        .unwrap();
    assert_ne!(model.id(), EntityId::ROOT);
    assert!(registry.find(EntityId::ROOT).unwrap().is_placeholder());
}

#[test]
fn explicit_backfill() {
    let mut registry = EntityRegistry::default();
    let reserved = registry.reserve(None, EntityKind::Model).unwrap();
    registry
        .backfill(reserved.id(), Holder::owned(Native::Model("late")))
        .unwrap();
    assert_eq!(registry.get(reserved.id()), Some(&Native::Model("late")));

    let err = registry
        .backfill(reserved.id(), Holder::owned(Native::Model("again")))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyBound(_)));

    let err = registry
        .backfill(EntityId::new(404), Holder::owned(Native::Model("x")))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EntityNotFound(_)));
}

#[test]
fn shared_objects_resolve_but_resist_mutation() {
    let mut registry = EntityRegistry::default();
    let native = Arc::new(Native::World("shared"));
    let id = registry
        .register_shared(None, EntityKind::World, Arc::clone(&native))
        .unwrap()
        .id();

    assert_eq!(registry.get(id), Some(&Native::World("shared")));
    let err = registry.get_kind_mut(id, EntityKind::World).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unsupported(_)));

    drop(native);
    assert!(registry.get_kind_mut(id, EntityKind::World).is_ok());
}

#[test]
fn unknown_ids_are_absent_not_errors() {
    let registry = EntityRegistry::<Native>::new(RegistryConfig::default());
    assert!(registry.find(EntityId::new(12)).is_none());
    assert!(registry.find(EntityId::INVALID).is_none());
    assert!(registry.kind_of(EntityId::new(12)).is_none());
}
