//! Entity identifiers and the handles that carry them.

use std::fmt;

/// Numeric entity identifier, unique within the registry that issued it.
///
/// Ids are allocated in strictly increasing order and never reused while the
/// registry lives. [`EntityId::INVALID`] is reserved and never assigned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Sentinel value representing "no entity".
    pub const INVALID: EntityId = EntityId(u64::MAX);

    /// The well-known id of the root slot reserved when an engine initiates.
    pub const ROOT: EntityId = EntityId(0);

    /// Creates an entity id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns true unless this is the [`EntityId::INVALID`] sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u64::MAX
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "EntityId({})", self.0)
        } else {
            write!(f, "EntityId(invalid)")
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#invalid")
        }
    }
}

/// The kind of an entity in the backend hierarchy.
///
/// Worlds hold models, models hold links, links hold shapes (collisions) and
/// joints.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntityKind {
    /// A simulation world.
    World,
    /// A model inside a world.
    Model,
    /// A rigid link inside a model.
    Link,
    /// A collision shape attached to a link.
    Shape,
    /// A joint between two links.
    Joint,
}

impl EntityKind {
    /// The kind a parent of this kind is expected to have, if any.
    #[must_use]
    pub const fn parent_kind(self) -> Option<EntityKind> {
        match self {
            Self::World => None,
            Self::Model => Some(Self::World),
            Self::Link => Some(Self::Model),
            Self::Shape | Self::Joint => Some(Self::Link),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::World => "world",
            Self::Model => "model",
            Self::Link => "link",
            Self::Shape => "shape",
            Self::Joint => "joint",
        };
        f.write_str(name)
    }
}

/// Opaque handle naming one entity inside a backend.
///
/// Identities carry only the numeric id. The native object behind it stays in
/// the backend's registry, so a handle never keeps a backend object alive and
/// never borrows from it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Identity {
    id: EntityId,
}

impl Identity {
    /// The invalid identity, returned where a backend could not produce one.
    pub const INVALID: Identity = Identity {
        id: EntityId::INVALID,
    };

    /// Wraps an entity id.
    #[must_use]
    pub const fn new(id: EntityId) -> Self {
        Self { id }
    }

    /// Returns the entity id.
    #[must_use]
    pub const fn id(self) -> EntityId {
        self.id
    }

    /// Returns true if this identity refers to an entity.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.id.is_valid()
    }
}

impl From<EntityId> for Identity {
    fn from(id: EntityId) -> Self {
        Self::new(id)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({:?})", self.id)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
