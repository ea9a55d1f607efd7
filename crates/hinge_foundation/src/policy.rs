//! Numeric and spatial policies.
//!
//! A [`Policy`] fixes the dimensionality of a feature set and the precision of
//! its scalars. Every feature interface and every entity proxy is generic over
//! one, so a 2D single-precision client and a 3D double-precision client share
//! the same feature definitions.

use std::fmt;

use glam::{Affine2, Affine3A, DAffine2, DAffine3, DVec2, DVec3, Vec2, Vec3};

/// A floating-point scalar usable by a policy.
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Converts from `f64`, rounding if the scalar is narrower.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// Dimensionality and precision of a feature set.
pub trait Policy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Scalar type for lengths, radii, times.
    type Scalar: Scalar;
    /// Vector type matching the dimensionality.
    type Vector: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;
    /// Rigid placement type matching the dimensionality.
    type Pose: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Number of spatial dimensions.
    const DIMENSION: usize;

    /// Short name, e.g. `"3d"` or `"2f"`.
    const NAME: &'static str;

    /// The identity placement.
    fn identity_pose() -> Self::Pose;

    /// The zero vector.
    fn zero_vector() -> Self::Vector;

    /// The vector with every component equal to one.
    fn unit_vector() -> Self::Vector;
}

macro_rules! define_policy {
    ($(#[$doc:meta])* $name:ident, $scalar:ty, $vector:ty, $pose:ty, $dim:expr, $label:expr) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Policy for $name {
            type Scalar = $scalar;
            type Vector = $vector;
            type Pose = $pose;

            const DIMENSION: usize = $dim;
            const NAME: &'static str = $label;

            fn identity_pose() -> Self::Pose {
                <$pose>::IDENTITY
            }

            fn zero_vector() -> Self::Vector {
                <$vector>::ZERO
            }

            fn unit_vector() -> Self::Vector {
                <$vector>::ONE
            }
        }
    };
}

define_policy!(
    /// Three dimensions, double precision.
    FeaturePolicy3d, f64, DVec3, DAffine3, 3, "3d"
);
define_policy!(
    /// Three dimensions, single precision.
    FeaturePolicy3f, f32, Vec3, Affine3A, 3, "3f"
);
define_policy!(
    /// Two dimensions, double precision.
    FeaturePolicy2d, f64, DVec2, DAffine2, 2, "2d"
);
define_policy!(
    /// Two dimensions, single precision.
    FeaturePolicy2f, f32, Vec2, Affine2, 2, "2f"
);
