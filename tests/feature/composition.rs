//! Feature composition tests

use hinge_feature::catalog::{
    AttachCapsuleShape, CapsuleShapeCast, ForwardStep, GetEntities, ModelKinematics,
    RemoveEntities,
};
use hinge_feature::{
    Feature, FeatureDescriptor, FeatureSet, declare_feature, find_unmet,
};
use hinge_foundation::ErrorKind;

declare_feature!(
    /// A third-party feature building on the catalog.
    ReadContacts, "test::ReadContacts", requires [GetEntities]
);

// =============================================================================
// Run-time Composition
// =============================================================================

#[test]
fn missing_requirement_is_rejected() {
    let err = FeatureSet::compose(&[RemoveEntities::DESCRIPTOR]).unwrap_err();
    match err.kind {
        ErrorKind::CompositionRejected { feature, missing } => {
            assert_eq!(feature, "hinge::RemoveEntities");
            assert_eq!(missing, "hinge::GetEntities");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn requirement_order_does_not_matter() {
    let set = FeatureSet::compose(&[
        ForwardStep::DESCRIPTOR,
        AttachCapsuleShape::DESCRIPTOR,
        ModelKinematics::DESCRIPTOR,
        CapsuleShapeCast::DESCRIPTOR,
    ])
    .unwrap();
    assert_eq!(set.len(), 4);
}

#[test]
fn duplicates_collapse() {
    let set = FeatureSet::compose(&[
        GetEntities::DESCRIPTOR,
        ReadContacts::DESCRIPTOR,
        GetEntities::DESCRIPTOR,
    ])
    .unwrap();
    assert_eq!(set.names(), vec!["hinge::GetEntities", "test::ReadContacts"]);
}

#[test]
fn superset_relation() {
    let small = FeatureSet::compose(&[GetEntities::DESCRIPTOR]).unwrap();
    let large =
        FeatureSet::compose(&[GetEntities::DESCRIPTOR, ReadContacts::DESCRIPTOR]).unwrap();
    assert!(large.is_superset_of(&small));
    assert!(!small.is_superset_of(&large));
}

// =============================================================================
// Compile-time Checks
// =============================================================================

const UNMET: Option<(FeatureDescriptor, FeatureDescriptor)> =
    find_unmet(&[ReadContacts::DESCRIPTOR, ForwardStep::DESCRIPTOR]);

#[test]
fn unmet_requirements_are_found_in_const_context() {
    let (feature, missing) = UNMET.unwrap();
    assert_eq!(feature.name, "test::ReadContacts");
    assert_eq!(missing.name, "hinge::GetEntities");
}

#[test]
fn descriptors_name_their_requirements() {
    let requires: Vec<_> = AttachCapsuleShape::DESCRIPTOR
        .requires
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(requires, vec!["hinge::CapsuleShapeCast"]);
    assert!(ModelKinematics::DESCRIPTOR.requires.is_empty());
}
