//! Integration tests for entity identifiers and handles

use hinge_foundation::{EntityId, EntityKind, Identity};

#[test]
fn root_is_zero_and_valid() {
    assert_eq!(EntityId::ROOT.raw(), 0);
    assert!(EntityId::ROOT.is_valid());
    assert!(!EntityId::INVALID.is_valid());
}

#[test]
fn identity_wraps_id() {
    let identity = Identity::new(EntityId::new(12));
    assert_eq!(identity.id(), EntityId::new(12));
    assert!(identity.is_valid());
    assert!(!Identity::INVALID.is_valid());
    assert_eq!(Identity::from(EntityId::new(12)), identity);
}

#[test]
fn display_formats() {
    assert_eq!(format!("{}", EntityId::new(5)), "#5");
    assert_eq!(format!("{:?}", EntityId::new(5)), "EntityId(5)");
    assert_eq!(format!("{}", Identity::new(EntityId::new(5))), "#5");
    assert_eq!(format!("{}", EntityId::INVALID), "#invalid");
}

#[test]
fn hierarchy_of_kinds() {
    assert_eq!(EntityKind::World.parent_kind(), None);
    assert_eq!(EntityKind::Model.parent_kind(), Some(EntityKind::World));
    assert_eq!(EntityKind::Link.parent_kind(), Some(EntityKind::Model));
    assert_eq!(EntityKind::Shape.parent_kind(), Some(EntityKind::Link));
    assert_eq!(EntityKind::Joint.parent_kind(), Some(EntityKind::Link));
}
