//! Construction of empty worlds, models and links.

use hinge_foundation::{EntityId, Policy, Result};

use crate::declare_feature;
use crate::entity::{Engine, Link, LinkKind, Model, ModelKind, World, WorldKind};
use crate::implementation::Implementation;
use crate::list::FeatureList;

/// Conventional name of a world built without a caller-chosen name.
pub const DEFAULT_WORLD_NAME: &str = "empty world";
/// Conventional name of a model built without a caller-chosen name.
pub const DEFAULT_MODEL_NAME: &str = "empty model";
/// Conventional name of a link built without a caller-chosen name.
pub const DEFAULT_LINK_NAME: &str = "empty link";

declare_feature!(
    /// Builds a world with nothing in it.
    ConstructEmptyWorld, "hinge::ConstructEmptyWorld"
);
declare_feature!(
    /// Builds a model with nothing in it.
    ConstructEmptyModel, "hinge::ConstructEmptyModel"
);
declare_feature!(
    /// Builds a link with nothing attached.
    ConstructEmptyLink, "hinge::ConstructEmptyLink"
);

/// Backend side of [`ConstructEmptyWorld`].
pub trait ConstructEmptyWorldImpl<P: Policy>: Implementation<P> {
    /// Builds a world served by `engine`.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn construct_empty_world(&mut self, engine: EntityId, name: &str) -> Result<EntityId>;
}

/// Backend side of [`ConstructEmptyModel`].
pub trait ConstructEmptyModelImpl<P: Policy>: Implementation<P> {
    /// Builds a model inside `world`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `world` is not a live world.
    fn construct_empty_model(&mut self, world: EntityId, name: &str) -> Result<EntityId>;
}

/// Backend side of [`ConstructEmptyLink`].
pub trait ConstructEmptyLinkImpl<P: Policy>: Implementation<P> {
    /// Builds a link inside `model`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `model` is not a live model.
    fn construct_empty_link(&mut self, model: EntityId, name: &str) -> Result<EntityId>;
}

impl<P: Policy, F: FeatureList> Engine<P, F>
where
    F::Backend<P>: ConstructEmptyWorldImpl<P>,
{
    /// Builds a world. [`DEFAULT_WORLD_NAME`] is the conventional name.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports.
    pub fn construct_empty_world(&self, name: &str) -> Result<World<P, F>> {
        let id = self.backend().construct_empty_world(self.id(), name)?;
        Ok(self.proxy::<WorldKind>(id))
    }
}

impl<P: Policy, F: FeatureList> World<P, F>
where
    F::Backend<P>: ConstructEmptyModelImpl<P>,
{
    /// Builds a model in this world. [`DEFAULT_MODEL_NAME`] is the
    /// conventional name.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the world has been removed.
    pub fn construct_empty_model(&self, name: &str) -> Result<Model<P, F>> {
        let id = self.backend().construct_empty_model(self.id(), name)?;
        Ok(self.proxy::<ModelKind>(id))
    }
}

impl<P: Policy, F: FeatureList> Model<P, F>
where
    F::Backend<P>: ConstructEmptyLinkImpl<P>,
{
    /// Builds a link in this model. [`DEFAULT_LINK_NAME`] is the
    /// conventional name.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the model has been removed.
    pub fn construct_empty_link(&self, name: &str) -> Result<Link<P, F>> {
        let id = self.backend().construct_empty_link(self.id(), name)?;
        Ok(self.proxy::<LinkKind>(id))
    }
}
