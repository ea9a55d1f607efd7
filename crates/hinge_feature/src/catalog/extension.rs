//! Backend-specific data attached to any entity.

use hinge_data::CompositeData;
use hinge_foundation::{EntityId, Policy, Result};

use crate::declare_feature;
use crate::entity::{Entity, Kind};
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Attaches arbitrary typed data to any entity.
    ExtensionData, "hinge::ExtensionData"
);

/// Backend side of [`ExtensionData`].
pub trait ExtensionDataImpl<P: Policy>: Implementation<P> {
    /// A copy of the data attached to `id`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` for unknown or removed ids.
    fn extension_data(&self, id: EntityId) -> Result<CompositeData>;

    /// Overlays `data` onto the data attached to `id`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` for unknown or removed ids.
    fn merge_extension_data(&mut self, id: EntityId, data: &CompositeData) -> Result<()>;
}

impl<P: Policy, F: FeatureList, K: Kind> Entity<P, F, K>
where
    F::Backend<P>: ExtensionDataImpl<P>,
{
    /// A copy of the data attached to this entity.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the entity has been removed.
    pub fn extension_data(&self) -> Result<CompositeData> {
        self.backend().extension_data(self.id())
    }

    /// Overlays `data` onto the data attached to this entity.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the entity has been removed.
    pub fn merge_extension_data(&self, data: &CompositeData) -> Result<()> {
        self.backend().merge_extension_data(self.id(), data)
    }
}
