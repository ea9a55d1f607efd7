//! Data label registration tests

use hinge_data::{Data, DataRegistry, DataTag};
use hinge_foundation::ErrorKind;

#[derive(Clone)]
struct Friction(f64);

#[derive(Clone)]
struct OtherFriction(f32);

impl Data for Friction {
    const LABEL: &'static str = "test::Friction";
}

impl Data for OtherFriction {
    const LABEL: &'static str = "test::Friction";
}

#[derive(Clone)]
struct Damping(f64);

impl Data for Damping {
    const LABEL: &'static str = "test::Damping";
}

#[test]
fn tags_derive_from_labels() {
    assert_eq!(Friction::TAG, DataTag::from_label("test::Friction"));
    assert_eq!(Friction::TAG, DataTag::of::<Friction>());
    assert_ne!(Friction::TAG, Damping::TAG);
}

#[test]
fn registering_twice_is_idempotent() {
    let mut registry = DataRegistry::new();
    let tag = registry.register::<Friction>().unwrap();
    assert_eq!(registry.register::<Friction>().unwrap(), tag);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.label_of(tag), Some("test::Friction"));
}

#[test]
fn label_collisions_are_rejected() {
    let mut registry = DataRegistry::new();
    registry.register::<Friction>().unwrap();
    registry.register::<Damping>().unwrap();

    let err = registry.register::<OtherFriction>().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::DataLabelCollision {
            label: "test::Friction",
            ..
        }
    ));
    assert!(registry.contains::<Friction>());
    assert!(!registry.contains::<OtherFriction>());
}
