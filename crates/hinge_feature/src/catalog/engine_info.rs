//! Engine name and index.

use hinge_foundation::{EntityId, Policy};

use crate::declare_feature;
use crate::entity::Engine;
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Reports the engine's name and index.
    GetEngineInfo, "hinge::GetEngineInfo"
);

/// Backend side of [`GetEngineInfo`].
pub trait GetEngineInfoImpl<P: Policy>: Implementation<P> {
    /// Name of the backend serving `engine`.
    fn engine_name(&self, engine: EntityId) -> String;

    /// Index `engine` was initiated with.
    fn engine_index(&self, engine: EntityId) -> usize;
}

impl<P: Policy, F: FeatureList> Engine<P, F>
where
    F::Backend<P>: GetEngineInfoImpl<P>,
{
    /// Name of the backend serving this engine.
    #[must_use]
    pub fn name(&self) -> String {
        self.backend().engine_name(self.id())
    }

    /// Index this engine was loaded with.
    #[must_use]
    pub fn index(&self) -> usize {
        self.backend().engine_index(self.id())
    }
}
