//! Fixed joints between links.

use hinge_foundation::{EntityId, Policy, Result};

use crate::catalog::entities::{GetEntities, GetEntitiesImpl};
use crate::declare_feature;
use crate::entity::{Joint, JointKind, Link};
use crate::list::FeatureList;

/// Conventional name of a fixed joint.
pub const DEFAULT_JOINT_NAME: &str = "fixed";

declare_feature!(
    /// Welds a link to another link, or to the world.
    AttachFixedJoint, "hinge::AttachFixedJoint", requires [GetEntities]
);

/// Backend side of [`AttachFixedJoint`].
///
/// A joint is a child of the link it moves. Its parent link is `None` while
/// the joint is fixed to the world or after it has been detached.
pub trait AttachFixedJointImpl<P: Policy>: GetEntitiesImpl<P> {
    /// Fixes `child_link` to `parent_link`, or to the world if `None`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if either link is not a live link.
    fn attach_fixed_joint(
        &mut self,
        child_link: EntityId,
        parent_link: Option<EntityId>,
        name: &str,
    ) -> Result<EntityId>;

    /// The link a joint moves.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `joint` is not a live joint.
    fn joint_child_link(&self, joint: EntityId) -> Result<EntityId>;

    /// The link a joint holds on to, if any.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `joint` is not a live joint.
    fn joint_parent_link(&self, joint: EntityId) -> Result<Option<EntityId>>;

    /// Releases a joint from its parent link.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `joint` is not a live joint.
    fn detach_joint(&mut self, joint: EntityId) -> Result<()>;
}

impl<P: Policy, F: FeatureList> Link<P, F>
where
    F::Backend<P>: AttachFixedJointImpl<P>,
{
    /// Fixes this link to `parent`, or to the world if `None`.
    /// [`DEFAULT_JOINT_NAME`] is the conventional name.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` if either link has been removed.
    pub fn attach_fixed_joint(&self, parent: Option<&Link<P, F>>, name: &str) -> Result<Joint<P, F>> {
        let parent = parent.map(Link::id);
        let id = self.backend().attach_fixed_joint(self.id(), parent, name)?;
        Ok(self.proxy::<JointKind>(id))
    }
}

impl<P: Policy, F: FeatureList> Joint<P, F>
where
    F::Backend<P>: AttachFixedJointImpl<P>,
{
    /// Id of the link this joint moves.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the joint has been removed.
    pub fn child_link_id(&self) -> Result<EntityId> {
        self.backend().joint_child_link(self.id())
    }

    /// Id of the link this joint holds on to, or `None` for the world.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the joint has been removed.
    pub fn parent_link_id(&self) -> Result<Option<EntityId>> {
        self.backend().joint_parent_link(self.id())
    }

    /// Releases this joint from its parent link.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the joint has been removed.
    pub fn detach(&self) -> Result<()> {
        self.backend().detach_joint(self.id())
    }
}
