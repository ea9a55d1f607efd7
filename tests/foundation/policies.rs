//! Integration tests for numeric and spatial policies

use glam::{Affine2, DAffine3, DVec3, Vec2};
use hinge_foundation::{FeaturePolicy2f, FeaturePolicy3d, Policy, Scalar};

#[test]
fn three_dimensional_double_precision() {
    assert_eq!(FeaturePolicy3d::DIMENSION, 3);
    assert_eq!(FeaturePolicy3d::NAME, "3d");
    assert_eq!(FeaturePolicy3d::identity_pose(), DAffine3::IDENTITY);
    assert_eq!(FeaturePolicy3d::unit_vector(), DVec3::ONE);
}

#[test]
fn two_dimensional_single_precision() {
    assert_eq!(FeaturePolicy2f::DIMENSION, 2);
    assert_eq!(FeaturePolicy2f::identity_pose(), Affine2::IDENTITY);
    assert_eq!(FeaturePolicy2f::zero_vector(), Vec2::ZERO);
}

#[test]
fn scalar_conversions() {
    assert_eq!(<f32 as Scalar>::from_f64(2.0), 2.0_f32);
    assert_eq!(<f64 as Scalar>::ONE.to_f64(), 1.0);
    assert_eq!(<f32 as Scalar>::ZERO.to_f64(), 0.0);
}
