//! Entity proxies.
//!
//! An [`Entity<P, F, K>`] is the client's handle on one backend entity: its
//! identity plus the engine's shared backend. Which methods a proxy has is
//! decided at compile time by the feature list `F`: every catalog feature
//! adds an inherent `impl` block gated on the backend interface providing
//! that feature's implementation trait.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use hinge_foundation::{EntityId, EntityKind, Error, ErrorKind, Identity, Policy, Result};
use parking_lot::MutexGuard;

use crate::feature::FeatureSet;
use crate::implementation::Implementation;
use crate::list::{BackendOf, FeatureList, SharedBackend};

/// Marker for what a proxy refers to.
pub trait Kind: 'static {
    /// Human-readable name of the kind.
    const NAME: &'static str;

    /// Registry kind of the entity, or `None` for the engine itself.
    const ENTITY_KIND: Option<EntityKind>;
}

macro_rules! define_kinds {
    ($($(#[$doc:meta])* $name:ident => $label:expr, $kind:expr;)+) => {
        $(
            $(#[$doc])*
            #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Kind for $name {
                const NAME: &'static str = $label;
                const ENTITY_KIND: Option<EntityKind> = $kind;
            }
        )+
    };
}

define_kinds! {
    /// The engine.
    EngineKind => "Engine", None;
    /// A world.
    WorldKind => "World", Some(EntityKind::World);
    /// A model.
    ModelKind => "Model", Some(EntityKind::Model);
    /// A link.
    LinkKind => "Link", Some(EntityKind::Link);
    /// A shape of any geometry.
    ShapeKind => "Shape", Some(EntityKind::Shape);
    /// A joint.
    JointKind => "Joint", Some(EntityKind::Joint);
    /// A shape known to be a capsule.
    CapsuleShapeKind => "CapsuleShape", Some(EntityKind::Shape);
    /// A shape known to be a box.
    BoxShapeKind => "BoxShape", Some(EntityKind::Shape);
    /// A shape known to be a sphere.
    SphereShapeKind => "SphereShape", Some(EntityKind::Shape);
}

/// Handle on one backend entity.
pub struct Entity<P: Policy, F: FeatureList, K: Kind> {
    identity: Identity,
    backend: SharedBackend<P, F>,
    _kind: PhantomData<fn() -> (P, K)>,
}

/// The engine proxy.
pub type Engine<P, F> = Entity<P, F, EngineKind>;
/// A world proxy.
pub type World<P, F> = Entity<P, F, WorldKind>;
/// A model proxy.
pub type Model<P, F> = Entity<P, F, ModelKind>;
/// A link proxy.
pub type Link<P, F> = Entity<P, F, LinkKind>;
/// A shape proxy.
pub type Shape<P, F> = Entity<P, F, ShapeKind>;
/// A joint proxy.
pub type Joint<P, F> = Entity<P, F, JointKind>;
/// A capsule shape proxy.
pub type CapsuleShape<P, F> = Entity<P, F, CapsuleShapeKind>;
/// A box shape proxy.
pub type BoxShape<P, F> = Entity<P, F, BoxShapeKind>;
/// A sphere shape proxy.
pub type SphereShape<P, F> = Entity<P, F, SphereShapeKind>;

impl<P: Policy, F: FeatureList> Entity<P, F, EngineKind> {
    /// Starts an engine on `backend`.
    ///
    /// The feature list's requirements were checked when it was declared;
    /// the backend is moved behind the list's aggregate interface and asked
    /// to initiate engine `engine_id`.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the backend answers with an invalid identity.
    pub fn load<B>(backend: B, engine_id: usize) -> Result<Self>
    where
        F: BackendOf<P, B>,
    {
        let features = F::feature_set()?;
        let backend = F::erase(backend);
        let identity = backend.lock().initiate_engine(engine_id);
        if !identity.is_valid() {
            return Err(Error::new(ErrorKind::Internal(format!(
                "backend returned an invalid identity for engine {engine_id}"
            ))));
        }

        tracing::debug!(
            policy = P::NAME,
            engine_id,
            %identity,
            features = ?features.names(),
            "loaded engine"
        );
        Ok(Self::from_parts(identity, backend))
    }

    /// Returns the features this engine was composed from.
    ///
    /// # Errors
    ///
    /// Never for lists built with [`feature_list!`](crate::feature_list).
    pub fn features(&self) -> Result<FeatureSet> {
        F::feature_set()
    }
}

impl<P: Policy, F: FeatureList, K: Kind> Entity<P, F, K> {
    pub(crate) fn from_parts(identity: Identity, backend: SharedBackend<P, F>) -> Self {
        Self {
            identity,
            backend,
            _kind: PhantomData,
        }
    }

    /// Returns the identity this proxy refers to.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Returns the numeric id this proxy refers to.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.identity.id()
    }

    /// Returns true if both proxies go through the same backend instance.
    #[must_use]
    pub fn same_engine<K2: Kind>(&self, other: &Entity<P, F, K2>) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend)
    }

    /// Locks the backend for one call.
    pub(crate) fn backend(&self) -> MutexGuard<'_, F::Backend<P>> {
        self.backend.lock()
    }

    /// A proxy of another kind on the same backend.
    pub(crate) fn proxy<K2: Kind>(&self, id: EntityId) -> Entity<P, F, K2> {
        Entity::from_parts(Identity::new(id), Arc::clone(&self.backend))
    }
}

impl<P: Policy, F: FeatureList, K: Kind> Clone for Entity<P, F, K> {
    fn clone(&self) -> Self {
        Self::from_parts(self.identity, Arc::clone(&self.backend))
    }
}

impl<P: Policy, F: FeatureList, K: Kind> PartialEq for Entity<P, F, K> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity && self.same_engine(other)
    }
}

impl<P: Policy, F: FeatureList, K: Kind> fmt::Debug for Entity<P, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.identity.id())
    }
}
