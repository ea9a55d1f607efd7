//! Capsule shapes.

use hinge_foundation::{EntityId, Policy, Result, Scalar};

use crate::declare_feature;
use crate::entity::{CapsuleShape, CapsuleShapeKind, Link, Shape};
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Recognises capsule shapes among a link's shapes.
    CapsuleShapeCast, "hinge::CapsuleShapeCast"
);
declare_feature!(
    /// Reads capsule radius and height.
    GetCapsuleShapeProperties, "hinge::GetCapsuleShapeProperties", requires [CapsuleShapeCast]
);
declare_feature!(
    /// Changes capsule radius and height.
    SetCapsuleShapeProperties, "hinge::SetCapsuleShapeProperties", requires [CapsuleShapeCast]
);
declare_feature!(
    /// Attaches new capsule shapes to links.
    AttachCapsuleShape, "hinge::AttachCapsuleShape", requires [CapsuleShapeCast]
);

/// Creation parameters for a capsule.
#[derive(Clone, Debug, PartialEq)]
pub struct CapsuleParams<P: Policy> {
    /// Shape name. Defaults to `"capsule"`.
    pub name: String,
    /// Radius of the hemispherical caps and the cylinder. Defaults to 1.
    pub radius: P::Scalar,
    /// Length of the cylindrical section. Defaults to 1.
    pub height: P::Scalar,
    /// Placement relative to the link. Defaults to the identity.
    pub pose: P::Pose,
}

impl<P: Policy> Default for CapsuleParams<P> {
    fn default() -> Self {
        Self {
            name: "capsule".to_string(),
            radius: <P::Scalar as Scalar>::ONE,
            height: <P::Scalar as Scalar>::ONE,
            pose: P::identity_pose(),
        }
    }
}

impl<P: Policy> CapsuleParams<P> {
    /// Creates parameters with the given dimensions and default name and pose.
    #[must_use]
    pub fn new(radius: P::Scalar, height: P::Scalar) -> Self {
        Self {
            radius,
            height,
            ..Self::default()
        }
    }

    /// Builder method to set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the radius.
    #[must_use]
    pub fn with_radius(mut self, radius: P::Scalar) -> Self {
        self.radius = radius;
        self
    }

    /// Builder method to set the height.
    #[must_use]
    pub fn with_height(mut self, height: P::Scalar) -> Self {
        self.height = height;
        self
    }

    /// Builder method to set the pose.
    #[must_use]
    pub fn with_pose(mut self, pose: P::Pose) -> Self {
        self.pose = pose;
        self
    }
}

/// Backend side of [`CapsuleShapeCast`].
pub trait CapsuleShapeCastImpl<P: Policy>: Implementation<P> {
    /// Returns `shape` if it is a capsule.
    fn capsule_shape_cast(&self, shape: EntityId) -> Option<EntityId>;
}

/// Backend side of [`GetCapsuleShapeProperties`].
pub trait GetCapsuleShapePropertiesImpl<P: Policy>: CapsuleShapeCastImpl<P> {
    /// Radius of a capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live capsule.
    fn capsule_radius(&self, shape: EntityId) -> Result<P::Scalar>;

    /// Height of a capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live capsule.
    fn capsule_height(&self, shape: EntityId) -> Result<P::Scalar>;
}

/// Backend side of [`SetCapsuleShapeProperties`].
pub trait SetCapsuleShapePropertiesImpl<P: Policy>: CapsuleShapeCastImpl<P> {
    /// Changes the radius of a capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live capsule.
    fn set_capsule_radius(&mut self, shape: EntityId, radius: P::Scalar) -> Result<()>;

    /// Changes the height of a capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live capsule.
    fn set_capsule_height(&mut self, shape: EntityId, height: P::Scalar) -> Result<()>;
}

/// Backend side of [`AttachCapsuleShape`].
pub trait AttachCapsuleShapeImpl<P: Policy>: CapsuleShapeCastImpl<P> {
    /// Attaches a capsule to `link`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `link` is not a live link.
    fn attach_capsule_shape(&mut self, link: EntityId, params: &CapsuleParams<P>)
    -> Result<EntityId>;
}

impl<P: Policy, F: FeatureList> Shape<P, F>
where
    F::Backend<P>: CapsuleShapeCastImpl<P>,
{
    /// Views this shape as a capsule, if it is one.
    #[must_use]
    pub fn cast_to_capsule_shape(&self) -> Option<CapsuleShape<P, F>> {
        let id = self.backend().capsule_shape_cast(self.id())?;
        Some(self.proxy::<CapsuleShapeKind>(id))
    }
}

impl<P: Policy, F: FeatureList> CapsuleShape<P, F>
where
    F::Backend<P>: GetCapsuleShapePropertiesImpl<P>,
{
    /// Radius of this capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn radius(&self) -> Result<P::Scalar> {
        self.backend().capsule_radius(self.id())
    }

    /// Height of this capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn height(&self) -> Result<P::Scalar> {
        self.backend().capsule_height(self.id())
    }
}

impl<P: Policy, F: FeatureList> CapsuleShape<P, F>
where
    F::Backend<P>: SetCapsuleShapePropertiesImpl<P>,
{
    /// Changes the radius of this capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn set_radius(&self, radius: P::Scalar) -> Result<()> {
        self.backend().set_capsule_radius(self.id(), radius)
    }

    /// Changes the height of this capsule.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn set_height(&self, height: P::Scalar) -> Result<()> {
        self.backend().set_capsule_height(self.id(), height)
    }
}

impl<P: Policy, F: FeatureList> Link<P, F>
where
    F::Backend<P>: AttachCapsuleShapeImpl<P>,
{
    /// Attaches a capsule to this link.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the link has been removed.
    pub fn attach_capsule_shape(&self, params: CapsuleParams<P>) -> Result<CapsuleShape<P, F>> {
        let id = self.backend().attach_capsule_shape(self.id(), &params)?;
        Ok(self.proxy::<CapsuleShapeKind>(id))
    }
}
