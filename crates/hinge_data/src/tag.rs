//! Storable data types and their tags.
//!
//! ## Stable type identity
//!
//! A [`DataTag`] is derived from the type's **label** using the FNV-1a 64-bit
//! hash, evaluated at compile time. Labels are chosen by the author of the
//! type (conventionally `crate::TypeName`), so the tag of a type is the same
//! in every plugin that links against it, regardless of which compiler or
//! build produced that plugin.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use hinge_foundation::{Error, ErrorKind, Result};

/// Key of a storable type inside a composite store.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DataTag(u64);

impl DataTag {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Computes the tag of a label.
    #[must_use]
    pub const fn from_label(label: &str) -> Self {
        Self(Self::FNV_OFFSET_BASIS).extend(label)
    }

    /// Continues the hash over `suffix`, as if it had been appended to the
    /// label.
    ///
    /// Generic data types use this to give each instantiation its own tag
    /// while sharing one label.
    #[must_use]
    pub const fn extend(self, suffix: &str) -> Self {
        let bytes = suffix.as_bytes();
        let mut hash = self.0;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// Returns the tag of `T`.
    #[must_use]
    pub const fn of<T: Data>() -> Self {
        T::TAG
    }

    /// Returns the raw hash.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for DataTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataTag({:#018x})", self.0)
    }
}

/// A type that can live in a composite store.
///
/// # Examples
///
/// ```rust
/// use hinge_data::{CompositeData, Data};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Friction(f64);
///
/// impl Data for Friction {
///     const LABEL: &'static str = "example::Friction";
/// }
///
/// let mut data = CompositeData::new();
/// data.insert(Friction(0.8));
/// assert_eq!(data.get::<Friction>(), Some(&Friction(0.8)));
/// ```
pub trait Data: Clone + Send + Sync + 'static {
    /// Stable, unique label of this type.
    const LABEL: &'static str;

    /// Tag derived from [`Data::LABEL`].
    const TAG: DataTag = DataTag::from_label(Self::LABEL);
}

/// Implements [`Data`] for one or more types.
///
/// ```rust
/// #[derive(Clone)]
/// struct Restitution(f64);
///
/// hinge_data::declare_data!(Restitution => "example::Restitution");
/// ```
#[macro_export]
macro_rules! declare_data {
    ($($ty:ty => $label:expr),+ $(,)?) => {
        $(
            impl $crate::Data for $ty {
                const LABEL: &'static str = $label;
            }
        )+
    };
}

#[derive(Clone, Debug)]
struct Registration {
    label: &'static str,
    type_name: &'static str,
    type_id: TypeId,
}

/// Registry of the data types a plugin or client intends to use.
///
/// Built once during start-up. Registration is optional for storing data;
/// its purpose is to catch two types that claim the same label (or labels
/// whose tags collide) before any store mixes them up.
#[derive(Clone, Debug, Default)]
pub struct DataRegistry {
    registrations: HashMap<DataTag, Registration>,
}

impl DataRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T`, returning its tag.
    ///
    /// Registering the same type twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DataLabelCollision`] if another type already owns
    /// the tag.
    pub fn register<T: Data>(&mut self) -> Result<DataTag> {
        let incoming = Registration {
            label: T::LABEL,
            type_name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
        };

        if let Some(existing) = self.registrations.get(&T::TAG) {
            if existing.type_id == incoming.type_id {
                return Ok(T::TAG);
            }
            return Err(Error::new(ErrorKind::DataLabelCollision {
                label: T::LABEL,
                existing: existing.type_name,
                incoming: incoming.type_name,
            }));
        }

        tracing::trace!(label = T::LABEL, tag = ?T::TAG, "registered data type");
        self.registrations.insert(T::TAG, incoming);
        Ok(T::TAG)
    }

    /// Returns true if `T` was registered.
    #[must_use]
    pub fn contains<T: Data>(&self) -> bool {
        self.registrations
            .get(&T::TAG)
            .is_some_and(|r| r.type_id == TypeId::of::<T>())
    }

    /// Returns the label registered for a tag.
    #[must_use]
    pub fn label_of(&self, tag: DataTag) -> Option<&'static str> {
        self.registrations.get(&tag).map(|r| r.label)
    }

    /// Returns the Rust type name registered for a tag.
    #[must_use]
    pub fn type_name_of(&self, tag: DataTag) -> Option<&'static str> {
        self.registrations.get(&tag).map(|r| r.type_name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
