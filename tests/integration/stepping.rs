//! Forward stepping and extension data

use glam::{DAffine3, DVec3};
use hinge_data::{CompositeData, declare_data};
use hinge_feature::catalog::{ChangedPoses, StepInput, TimeStep, WorldTime};
use hinge_tpe::{FeaturePolicy3d, TpeConfig};

use crate::scene;

// =============================================================================
// Stepping
// =============================================================================

#[test]
fn step_advances_time_and_moves_models() {
    let (_engine, world, model, _link) = scene();
    model.set_pose(DAffine3::from_translation(DVec3::X)).unwrap();
    model.set_linear_velocity(DVec3::new(0.0, 2.0, 0.0)).unwrap();

    let mut input = StepInput::new().with(TimeStep(0.25));
    let mut output = world.step(&mut input).unwrap();

    assert_eq!(output.get::<WorldTime>(), Some(&WorldTime(0.25)));
    let changed = output.get::<ChangedPoses<FeaturePolicy3d>>().unwrap();
    assert_eq!(changed.0, vec![(model.id(), model.pose().unwrap())]);
    assert_eq!(
        model.pose().unwrap(),
        DAffine3::from_translation(DVec3::new(1.0, 0.5, 0.0))
    );
    assert_eq!(model.linear_velocity().unwrap(), DVec3::new(0.0, 2.0, 0.0));
}

#[test]
fn time_accumulates_across_steps() {
    let engine = hinge_tpe::load(TpeConfig::default().with_default_time_step(0.5), 0).unwrap();
    let world = engine.construct_empty_world("world").unwrap();

    let mut input = StepInput::new();
    world.step(&mut input).unwrap();
    input.insert(TimeStep(1.0));
    let mut output = world.step(&mut input).unwrap();
    assert_eq!(output.get::<WorldTime>(), Some(&WorldTime(1.5)));
}

#[test]
fn resting_models_are_not_reported() {
    let (_engine, world, _model, _link) = scene();
    let mut input = StepInput::new().with(TimeStep(0.1));
    let mut output = world.step(&mut input).unwrap();
    assert_eq!(output.get::<ChangedPoses<FeaturePolicy3d>>().map(|c| c.0.len()), Some(0));
    assert!(input.diagnose().is_clean());
}

// =============================================================================
// Extension Data
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Friction(f64);

#[derive(Clone, Debug, PartialEq)]
struct Color([u8; 3]);

declare_data!(
    Friction => "test::Friction",
    Color => "test::Color",
);

#[test]
fn extension_data_round_trip() {
    let (_engine, _world, model, link) = scene();

    link.merge_extension_data(&CompositeData::new().with(Friction(0.4)))
        .unwrap();
    link.merge_extension_data(&CompositeData::new().with(Color([255, 0, 0])))
        .unwrap();

    let mut data = link.extension_data().unwrap();
    assert_eq!(data.get::<Friction>(), Some(&Friction(0.4)));
    assert_eq!(data.get::<Color>(), Some(&Color([255, 0, 0])));
    assert!(model.extension_data().unwrap().is_empty());
}

#[test]
fn extension_data_of_removed_entity_is_an_error() {
    let (_engine, _world, model, link) = scene();
    model.remove().unwrap();
    assert!(link.extension_data().is_err());
    assert!(
        link.merge_extension_data(&CompositeData::new().with(Friction(1.0)))
            .is_err()
    );
}
