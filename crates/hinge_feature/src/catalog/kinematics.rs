//! Model pose and linear velocity.

use hinge_foundation::{EntityId, Policy, Result};

use crate::declare_feature;
use crate::entity::Model;
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Reads and writes the placement and velocity of models.
    ModelKinematics, "hinge::ModelKinematics"
);

/// Backend side of [`ModelKinematics`].
///
/// # Errors
///
/// Every method fails with `EntityNotFound` or `WrongKind` if `model` is not
/// a live model.
#[allow(clippy::missing_errors_doc)]
pub trait ModelKinematicsImpl<P: Policy>: Implementation<P> {
    /// Placement of a model in its world.
    fn model_pose(&self, model: EntityId) -> Result<P::Pose>;

    /// Moves a model.
    fn set_model_pose(&mut self, model: EntityId, pose: P::Pose) -> Result<()>;

    /// Linear velocity of a model in world coordinates.
    fn model_linear_velocity(&self, model: EntityId) -> Result<P::Vector>;

    /// Changes the linear velocity of a model.
    fn set_model_linear_velocity(&mut self, model: EntityId, velocity: P::Vector) -> Result<()>;
}

#[allow(clippy::missing_errors_doc)]
impl<P: Policy, F: FeatureList> Model<P, F>
where
    F::Backend<P>: ModelKinematicsImpl<P>,
{
    /// Placement of this model in its world.
    pub fn pose(&self) -> Result<P::Pose> {
        self.backend().model_pose(self.id())
    }

    /// Moves this model.
    pub fn set_pose(&self, pose: P::Pose) -> Result<()> {
        self.backend().set_model_pose(self.id(), pose)
    }

    /// Linear velocity of this model.
    pub fn linear_velocity(&self) -> Result<P::Vector> {
        self.backend().model_linear_velocity(self.id())
    }

    /// Changes the linear velocity of this model.
    pub fn set_linear_velocity(&self, velocity: P::Vector) -> Result<()> {
        self.backend().set_model_linear_velocity(self.id(), velocity)
    }
}
