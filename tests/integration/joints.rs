//! Fixed joints

use hinge_feature::catalog::DEFAULT_JOINT_NAME;

use crate::scene;

#[test]
fn joint_to_another_link() {
    let (_engine, _world, model, child) = scene();
    let parent = model.construct_empty_link("base").unwrap();
    let joint = child.attach_fixed_joint(Some(&parent), DEFAULT_JOINT_NAME).unwrap();

    assert_eq!(joint.child_link_id().unwrap(), child.id());
    assert_eq!(joint.parent_link_id().unwrap(), Some(parent.id()));
    assert_eq!(joint.link(), Some(child.clone()));
    assert_eq!(child.joint_count(), 1);
    assert_eq!(child.joint_by_name("fixed"), Some(joint.clone()));
    assert_eq!(joint.name().unwrap(), "fixed");
}

#[test]
fn joint_to_the_world_and_detach() {
    let (_engine, _world, model, child) = scene();
    let parent = model.construct_empty_link("base").unwrap();

    let welded = child.attach_fixed_joint(None, "weld").unwrap();
    assert_eq!(welded.parent_link_id().unwrap(), None);

    let joint = child.attach_fixed_joint(Some(&parent), "fixed").unwrap();
    joint.detach().unwrap();
    assert_eq!(joint.parent_link_id().unwrap(), None);
    assert_eq!(joint.index().unwrap(), 1);
}

#[test]
fn joints_go_with_their_model() {
    let (_engine, _world, model, child) = scene();
    let joint = child.attach_fixed_joint(None, "fixed").unwrap();
    model.remove().unwrap();
    assert!(joint.child_link_id().is_err());
    assert!(joint.detach().is_err());
}
