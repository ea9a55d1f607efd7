//! Sphere shapes.

use hinge_foundation::{EntityId, Policy, Result, Scalar};

use crate::declare_feature;
use crate::entity::{Link, Shape, SphereShape, SphereShapeKind};
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Recognises sphere shapes among a link's shapes.
    SphereShapeCast, "hinge::SphereShapeCast"
);
declare_feature!(
    /// Reads sphere radius.
    GetSphereShapeProperties, "hinge::GetSphereShapeProperties", requires [SphereShapeCast]
);
declare_feature!(
    /// Changes sphere radius.
    SetSphereShapeProperties, "hinge::SetSphereShapeProperties", requires [SphereShapeCast]
);
declare_feature!(
    /// Attaches new sphere shapes to links.
    AttachSphereShape, "hinge::AttachSphereShape", requires [SphereShapeCast]
);

/// Creation parameters for a sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereParams<P: Policy> {
    /// Shape name. Defaults to `"sphere"`.
    pub name: String,
    /// Radius. Defaults to 1.
    pub radius: P::Scalar,
    /// Placement relative to the link. Defaults to the identity.
    pub pose: P::Pose,
}

impl<P: Policy> Default for SphereParams<P> {
    fn default() -> Self {
        Self {
            name: "sphere".to_string(),
            radius: <P::Scalar as Scalar>::ONE,
            pose: P::identity_pose(),
        }
    }
}

impl<P: Policy> SphereParams<P> {
    /// Creates parameters with the given radius.
    #[must_use]
    pub fn new(radius: P::Scalar) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Builder method to set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the pose.
    #[must_use]
    pub fn with_pose(mut self, pose: P::Pose) -> Self {
        self.pose = pose;
        self
    }
}

/// Backend side of [`SphereShapeCast`].
pub trait SphereShapeCastImpl<P: Policy>: Implementation<P> {
    /// Returns `shape` if it is a sphere.
    fn sphere_shape_cast(&self, shape: EntityId) -> Option<EntityId>;
}

/// Backend side of [`GetSphereShapeProperties`].
pub trait GetSphereShapePropertiesImpl<P: Policy>: SphereShapeCastImpl<P> {
    /// Radius of a sphere.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live sphere.
    fn sphere_radius(&self, shape: EntityId) -> Result<P::Scalar>;
}

/// Backend side of [`SetSphereShapeProperties`].
pub trait SetSphereShapePropertiesImpl<P: Policy>: SphereShapeCastImpl<P> {
    /// Changes the radius of a sphere.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live sphere.
    fn set_sphere_radius(&mut self, shape: EntityId, radius: P::Scalar) -> Result<()>;
}

/// Backend side of [`AttachSphereShape`].
pub trait AttachSphereShapeImpl<P: Policy>: SphereShapeCastImpl<P> {
    /// Attaches a sphere to `link`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `link` is not a live link.
    fn attach_sphere_shape(&mut self, link: EntityId, params: &SphereParams<P>)
    -> Result<EntityId>;
}

impl<P: Policy, F: FeatureList> Shape<P, F>
where
    F::Backend<P>: SphereShapeCastImpl<P>,
{
    /// Views this shape as a sphere, if it is one.
    #[must_use]
    pub fn cast_to_sphere_shape(&self) -> Option<SphereShape<P, F>> {
        let id = self.backend().sphere_shape_cast(self.id())?;
        Some(self.proxy::<SphereShapeKind>(id))
    }
}

impl<P: Policy, F: FeatureList> SphereShape<P, F>
where
    F::Backend<P>: GetSphereShapePropertiesImpl<P>,
{
    /// Radius of this sphere.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn radius(&self) -> Result<P::Scalar> {
        self.backend().sphere_radius(self.id())
    }
}

impl<P: Policy, F: FeatureList> SphereShape<P, F>
where
    F::Backend<P>: SetSphereShapePropertiesImpl<P>,
{
    /// Changes the radius of this sphere.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn set_radius(&self, radius: P::Scalar) -> Result<()> {
        self.backend().set_sphere_radius(self.id(), radius)
    }
}

impl<P: Policy, F: FeatureList> Link<P, F>
where
    F::Backend<P>: AttachSphereShapeImpl<P>,
{
    /// Attaches a sphere to this link.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the link has been removed.
    pub fn attach_sphere_shape(&self, params: SphereParams<P>) -> Result<SphereShape<P, F>> {
        let id = self.backend().attach_sphere_shape(self.id(), &params)?;
        Ok(self.proxy::<SphereShapeKind>(id))
    }
}
