//! Shape attachment, casting, and properties

use glam::{DAffine3, DVec3};
use hinge_feature::catalog::{BoxParams, CapsuleParams, SphereParams};

use crate::scene;

#[test]
fn capsule_dimensions_read_back_exactly() {
    let (_engine, _world, _model, link) = scene();
    let capsule = link.attach_capsule_shape(CapsuleParams::new(2.0, 3.0)).unwrap();
    assert_eq!(capsule.radius().unwrap(), 2.0);
    assert_eq!(capsule.height().unwrap(), 3.0);
}

#[test]
fn capsule_setters() {
    let (_engine, _world, _model, link) = scene();
    let capsule = link.attach_capsule_shape(CapsuleParams::default()).unwrap();
    capsule.set_radius(0.25).unwrap();
    capsule.set_height(1.75).unwrap();
    assert_eq!(capsule.radius().unwrap(), 0.25);
    assert_eq!(capsule.height().unwrap(), 1.75);
    assert_eq!(capsule.name().unwrap(), "capsule");
}

#[test]
fn box_and_sphere_properties() {
    let (_engine, _world, _model, link) = scene();
    let cube = link
        .attach_box_shape(BoxParams::new(DVec3::new(1.0, 2.0, 3.0)).with_name("crate"))
        .unwrap();
    let ball = link
        .attach_sphere_shape(SphereParams::new(0.5).with_pose(DAffine3::from_translation(DVec3::Z)))
        .unwrap();

    assert_eq!(cube.size().unwrap(), DVec3::new(1.0, 2.0, 3.0));
    cube.set_size(DVec3::ONE).unwrap();
    assert_eq!(cube.size().unwrap(), DVec3::ONE);

    assert_eq!(ball.radius().unwrap(), 0.5);
    ball.set_radius(0.75).unwrap();
    assert_eq!(ball.radius().unwrap(), 0.75);
    assert_eq!(ball.name().unwrap(), "sphere");
}

#[test]
fn casts_recover_the_geometry() {
    let (_engine, _world, _model, link) = scene();
    link.attach_capsule_shape(CapsuleParams::new(2.0, 3.0)).unwrap();
    link.attach_box_shape(BoxParams::default()).unwrap();

    assert_eq!(link.shape_count(), 2);
    let first = link.shape_by_index(0).unwrap();
    let second = link.shape_by_name("box").unwrap();

    let capsule = first.cast_to_capsule_shape().unwrap();
    assert_eq!(capsule.height().unwrap(), 3.0);
    assert!(first.cast_to_box_shape().is_none());
    assert!(first.cast_to_sphere_shape().is_none());
    assert!(second.cast_to_box_shape().is_some());
    assert!(second.cast_to_capsule_shape().is_none());
    assert_eq!(first.link(), Some(link));
}
