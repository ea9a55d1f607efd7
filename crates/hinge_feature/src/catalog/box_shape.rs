//! Box shapes.

use hinge_foundation::{EntityId, Policy, Result};

use crate::declare_feature;
use crate::entity::{BoxShape, BoxShapeKind, Link, Shape};
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Recognises box shapes among a link's shapes.
    BoxShapeCast, "hinge::BoxShapeCast"
);
declare_feature!(
    /// Reads box dimensions.
    GetBoxShapeProperties, "hinge::GetBoxShapeProperties", requires [BoxShapeCast]
);
declare_feature!(
    /// Changes box dimensions.
    SetBoxShapeProperties, "hinge::SetBoxShapeProperties", requires [BoxShapeCast]
);
declare_feature!(
    /// Attaches new box shapes to links.
    AttachBoxShape, "hinge::AttachBoxShape", requires [BoxShapeCast]
);

/// Creation parameters for a box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxParams<P: Policy> {
    /// Shape name. Defaults to `"box"`.
    pub name: String,
    /// Edge lengths along each axis. Defaults to one on every axis.
    pub size: P::Vector,
    /// Placement relative to the link. Defaults to the identity.
    pub pose: P::Pose,
}

impl<P: Policy> Default for BoxParams<P> {
    fn default() -> Self {
        Self {
            name: "box".to_string(),
            size: P::unit_vector(),
            pose: P::identity_pose(),
        }
    }
}

impl<P: Policy> BoxParams<P> {
    /// Creates parameters with the given edge lengths.
    #[must_use]
    pub fn new(size: P::Vector) -> Self {
        Self {
            size,
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

/// Backend side of [`BoxShapeCast`].
pub trait BoxShapeCastImpl<P: Policy>: Implementation<P> {
    /// Returns `shape` if it is a box.
    fn box_shape_cast(&self, shape: EntityId) -> Option<EntityId>;
}

/// Backend side of [`GetBoxShapeProperties`].
pub trait GetBoxShapePropertiesImpl<P: Policy>: BoxShapeCastImpl<P> {
    /// Edge lengths of a box.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live box.
    fn box_size(&self, shape: EntityId) -> Result<P::Vector>;
}

/// Backend side of [`SetBoxShapeProperties`].
pub trait SetBoxShapePropertiesImpl<P: Policy>: BoxShapeCastImpl<P> {
    /// Changes the edge lengths of a box.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `shape` is not a live box.
    fn set_box_size(&mut self, shape: EntityId, size: P::Vector) -> Result<()>;
}

/// Backend side of [`AttachBoxShape`].
pub trait AttachBoxShapeImpl<P: Policy>: BoxShapeCastImpl<P> {
    /// Attaches a box to `link`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `link` is not a live link.
    fn attach_box_shape(&mut self, link: EntityId, params: &BoxParams<P>) -> Result<EntityId>;
}

impl<P: Policy, F: FeatureList> Shape<P, F>
where
    F::Backend<P>: BoxShapeCastImpl<P>,
{
    /// Views this shape as a box, if it is one.
    #[must_use]
    pub fn cast_to_box_shape(&self) -> Option<BoxShape<P, F>> {
        let id = self.backend().box_shape_cast(self.id())?;
        Some(self.proxy::<BoxShapeKind>(id))
    }
}

impl<P: Policy, F: FeatureList> BoxShape<P, F>
where
    F::Backend<P>: GetBoxShapePropertiesImpl<P>,
{
    /// Edge lengths of this box.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn size(&self) -> Result<P::Vector> {
        self.backend().box_size(self.id())
    }
}

impl<P: Policy, F: FeatureList> BoxShape<P, F>
where
    F::Backend<P>: SetBoxShapePropertiesImpl<P>,
{
    /// Changes the edge lengths of this box.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the shape has been removed.
    pub fn set_size(&self, size: P::Vector) -> Result<()> {
        self.backend().set_box_size(self.id(), size)
    }
}

impl<P: Policy, F: FeatureList> Link<P, F>
where
    F::Backend<P>: AttachBoxShapeImpl<P>,
{
    /// Attaches a box to this link.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the link has been removed.
    pub fn attach_box_shape(&self, params: BoxParams<P>) -> Result<BoxShape<P, F>> {
        let id = self.backend().attach_box_shape(self.id(), &params)?;
        Ok(self.proxy::<BoxShapeKind>(id))
    }
}
