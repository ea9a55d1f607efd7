//! Model removal.

use hinge_foundation::{EntityId, EntityKind, Policy, Result};

use crate::catalog::entities::{GetEntities, GetEntitiesImpl};
use crate::declare_feature;
use crate::entity::{Model, World};
use crate::list::FeatureList;

declare_feature!(
    /// Removes models from their world.
    RemoveEntities, "hinge::RemoveEntities", requires [GetEntities]
);

/// Backend side of [`RemoveEntities`].
pub trait RemoveEntitiesImpl<P: Policy>: GetEntitiesImpl<P> {
    /// Removes `model` with everything inside it.
    ///
    /// Returns false if the model was already gone.
    ///
    /// # Errors
    ///
    /// `WrongKind` if `model` names something other than a model.
    fn remove_model(&mut self, model: EntityId) -> Result<bool>;

    /// Returns true if `model` no longer exists.
    fn model_removed(&self, model: EntityId) -> bool;
}

impl<P: Policy, F: FeatureList> World<P, F>
where
    F::Backend<P>: RemoveEntitiesImpl<P>,
{
    /// Removes the model at `index`. Returns false if there is none.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports.
    pub fn remove_model_by_index(&self, index: usize) -> Result<bool> {
        let mut backend = self.backend();
        match backend.child_by_index(self.id(), EntityKind::Model, index) {
            Some(model) => backend.remove_model(model),
            None => Ok(false),
        }
    }

    /// Removes the model named `name`. Returns false if there is none.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports.
    pub fn remove_model_by_name(&self, name: &str) -> Result<bool> {
        let mut backend = self.backend();
        match backend.child_by_name(self.id(), EntityKind::Model, name) {
            Some(model) => backend.remove_model(model),
            None => Ok(false),
        }
    }
}

impl<P: Policy, F: FeatureList> Model<P, F>
where
    F::Backend<P>: RemoveEntitiesImpl<P>,
{
    /// Removes this model. Returns false if it was already gone.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports.
    pub fn remove(&self) -> Result<bool> {
        self.backend().remove_model(self.id())
    }

    /// Returns true once this model has been removed.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.backend().model_removed(self.id())
    }
}
