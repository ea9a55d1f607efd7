//! Hierarchy and removal tests

use hinge_foundation::{EntityId, EntityKind, ErrorKind};
use hinge_registry::{EntityRegistry, RegistryConfig};

fn id_after(registry: &mut EntityRegistry<&'static str>, parent: EntityId, kind: EntityKind) -> EntityId {
    registry
        .register_owned(Some(parent), kind, "native")
        .unwrap()
        .id()
}

#[test]
fn world_model_link_hierarchy() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let world = id_after(&mut registry, EntityId::ROOT, EntityKind::World);
    let model = id_after(&mut registry, world, EntityKind::Model);
    let link = id_after(&mut registry, model, EntityKind::Link);

    let hierarchy = registry.hierarchy();
    assert_eq!(hierarchy.get(&link), Some(&model));
    assert_eq!(hierarchy.get(&model), Some(&world));
    assert_eq!(hierarchy.get(&world), None);
    assert_eq!(registry.children_of(model), &[link]);
}

#[test]
fn ids_are_never_reused() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let first = id_after(&mut registry, EntityId::ROOT, EntityKind::World);
    registry.remove(first).unwrap();
    let second = id_after(&mut registry, EntityId::ROOT, EntityKind::World);
    assert!(second > first);
    assert!(!registry.contains(first));
}

#[test]
fn removal_takes_the_subtree() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let world = id_after(&mut registry, EntityId::ROOT, EntityKind::World);
    let model = id_after(&mut registry, world, EntityKind::Model);
    let link = id_after(&mut registry, model, EntityKind::Link);
    let shape = id_after(&mut registry, link, EntityKind::Shape);
    let sibling = id_after(&mut registry, world, EntityKind::Model);

    assert_eq!(registry.remove(model).unwrap(), 3);
    assert!(!registry.contains(shape));
    assert!(registry.contains(sibling));
    assert_eq!(registry.children_of(world), &[sibling]);

    let err = registry.remove(model).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EntityNotFound(_)));
}

#[test]
fn dangling_parents_follow_config() {
    let mut lenient = EntityRegistry::default();
    lenient.initiate_engine();
    let world = id_after(&mut lenient, EntityId::ROOT, EntityKind::World);
    let model = id_after(&mut lenient, world, EntityKind::Model);
    lenient.remove(model).unwrap();
    let orphan = lenient
        .register_owned(Some(model), EntityKind::Link, "orphan")
        .unwrap();
    assert_eq!(lenient.parent_of(orphan.id()), Some(model));

    let mut strict = EntityRegistry::new(RegistryConfig::strict());
    let err = strict
        .register_owned(Some(EntityId::new(50)), EntityKind::Model, "orphan")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DanglingParent(_)));
    assert!(strict.is_empty());
}

#[test]
fn get_kind_checks_kind() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let link = id_after(&mut registry, EntityId::ROOT, EntityKind::Link);
    assert_eq!(registry.get_kind(link, EntityKind::Link).unwrap(), &"native");
    let err = registry.get_kind(link, EntityKind::Shape).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::WrongKind {
            expected: EntityKind::Shape,
            actual: EntityKind::Link,
            ..
        }
    ));
}

#[test]
fn metadata_lives_with_the_slot() {
    #[derive(Clone, Debug, PartialEq)]
    struct Tag(u8);
    hinge_data::declare_data!(Tag => "test::Tag");

    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let id = id_after(&mut registry, EntityId::ROOT, EntityKind::Model);
    registry.metadata_mut(id).unwrap().insert(Tag(7));
    assert_eq!(registry.metadata(id).unwrap().peek::<Tag>(), Some(&Tag(7)));

    registry.remove(id).unwrap();
    assert!(registry.metadata(id).is_none());
}

#[test]
fn unissued_parent_ids_are_never_adopted() {
    let mut registry = EntityRegistry::default();

    // The id about to be issued cannot become its own parent.
    let err = registry
        .register_owned(Some(EntityId::new(1)), EntityKind::Model, "self")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DanglingParent(_)));

    let err = registry
        .register_owned(Some(EntityId::new(2)), EntityKind::Link, "early")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DanglingParent(_)));

    let first = registry.register_owned(None, EntityKind::Model, "a").unwrap().id();
    let second = registry.register_owned(None, EntityKind::Model, "b").unwrap().id();
    assert_eq!(registry.parent_of(first), None);
    assert!(registry.children_of(first).is_empty());
    assert!(registry.children_of(second).is_empty());
    assert!(registry.hierarchy().is_empty());

    assert_eq!(registry.remove(second).unwrap(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn hierarchy_agrees_with_child_lists() {
    let mut registry = EntityRegistry::default();
    registry.initiate_engine();
    let world = id_after(&mut registry, EntityId::ROOT, EntityKind::World);
    let model = id_after(&mut registry, world, EntityKind::Model);
    let retired = id_after(&mut registry, model, EntityKind::Link);
    registry.remove(retired).unwrap();
    registry
        .register_owned(Some(retired), EntityKind::Shape, "orphan")
        .unwrap();
    id_after(&mut registry, model, EntityKind::Link);

    for (child, parent) in registry.hierarchy() {
        if registry.contains(parent) {
            assert!(registry.children_of(parent).contains(&child));
        }
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn removal_never_leaves_orphans(
            parents in prop::collection::vec(0usize..64, 1..40),
            victim in 0usize..64,
        ) {
            let mut registry = EntityRegistry::default();
            let mut ids = vec![registry.register_owned(None, EntityKind::Link, "root").unwrap().id()];
            for pick in parents {
                let parent = ids[pick % ids.len()];
                ids.push(id_after(&mut registry, parent, EntityKind::Link));
            }

            let before = registry.len();
            let removed = registry.remove(ids[victim % ids.len()]).unwrap();
            prop_assert!(removed >= 1);
            prop_assert_eq!(registry.len() + removed, before);

            for id in registry.ids() {
                if let Some(parent) = registry.parent_of(id) {
                    prop_assert!(registry.contains(parent));
                }
            }
        }
    }
}
