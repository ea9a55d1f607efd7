//! Features, their descriptors, and runtime composition.
//!
//! A feature is a named capability. Its [`FeatureDescriptor`] carries a
//! stable [`FeatureId`] (FNV-1a hash of the name) and the descriptors of the
//! features it requires. Descriptors are plain constants, so requirement
//! checks can run both at compile time ([`assert_requirements`], used by
//! [`feature_list!`](crate::feature_list)) and at run time
//! ([`FeatureSet::compose`]).

use std::fmt;

use hinge_foundation::{Error, Result};

/// Stable identifier of a feature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FeatureId(u64);

impl FeatureId {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Computes the id of a feature name.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// Returns the raw hash.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureId({:#018x})", self.0)
    }
}

/// Compile-time description of a feature.
#[derive(Copy, Clone, Debug)]
pub struct FeatureDescriptor {
    /// Unique name, conventionally `crate::FeatureName`.
    pub name: &'static str,
    /// Hash of [`Self::name`].
    pub id: FeatureId,
    /// Features that must be present in any list containing this one.
    pub requires: &'static [FeatureDescriptor],
}

impl PartialEq for FeatureDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FeatureDescriptor {}

/// A named capability.
///
/// Implement through [`declare_feature!`](crate::declare_feature).
pub trait Feature: 'static {
    /// Name, id and requirements of this feature.
    const DESCRIPTOR: FeatureDescriptor;
}

/// Declares a feature marker type.
///
/// ```rust
/// use hinge_feature::{Feature, declare_feature};
///
/// declare_feature!(
///     /// Reads contact points.
///     GetContacts, "example::GetContacts"
/// );
/// declare_feature!(
///     /// Filters contacts by collision group.
///     FilterContacts, "example::FilterContacts", requires [GetContacts]
/// );
///
/// assert_eq!(FilterContacts::DESCRIPTOR.requires[0].name, "example::GetContacts");
/// ```
#[macro_export]
macro_rules! declare_feature {
    ($(#[$meta:meta])* $name:ident, $label:expr $(, requires [$($required:ident),* $(,)?])? $(,)?) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $crate::Feature for $name {
            const DESCRIPTOR: $crate::FeatureDescriptor = $crate::FeatureDescriptor {
                name: $label,
                id: $crate::FeatureId::from_name($label),
                requires: &[$($(<$required as $crate::Feature>::DESCRIPTOR),*)?],
            };
        }
    };
}

/// Finds the first member of `features` whose requirement is absent.
///
/// Returns `(feature, missing requirement)`.
#[must_use]
pub const fn find_unmet(
    features: &[FeatureDescriptor],
) -> Option<(FeatureDescriptor, FeatureDescriptor)> {
    let mut i = 0;
    while i < features.len() {
        let requires = features[i].requires;
        let mut r = 0;
        while r < requires.len() {
            if !contains_id(features, requires[r].id) {
                return Some((features[i], requires[r]));
            }
            r += 1;
        }
        i += 1;
    }
    None
}

/// Aborts constant evaluation if a member of `features` lacks a requirement.
///
/// # Panics
///
/// When a requirement is unmet. Evaluated in a `const` item this is a
/// compile error.
pub const fn assert_requirements(features: &[FeatureDescriptor]) {
    if find_unmet(features).is_some() {
        panic!("feature list is missing a feature required by one of its members");
    }
}

const fn contains_id(features: &[FeatureDescriptor], id: FeatureId) -> bool {
    let mut i = 0;
    while i < features.len() {
        if features[i].id.raw() == id.raw() {
            return true;
        }
        i += 1;
    }
    false
}

/// A deduplicated set of features whose requirements are all satisfied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSet {
    features: Vec<FeatureDescriptor>,
}

impl FeatureSet {
    /// Composes a set from descriptors, in order, dropping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CompositionRejected`](hinge_foundation::ErrorKind::CompositionRejected)
    /// naming the first feature whose requirement is absent. Nothing is
    /// built in that case.
    pub fn compose(descriptors: &[FeatureDescriptor]) -> Result<Self> {
        let mut features: Vec<FeatureDescriptor> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if !features.contains(descriptor) {
                features.push(*descriptor);
            }
        }

        if let Some((feature, missing)) = find_unmet(&features) {
            tracing::warn!(
                feature = feature.name,
                missing = missing.name,
                "rejected feature composition"
            );
            return Err(Error::composition_rejected(feature.name, missing.name));
        }

        tracing::trace!(count = features.len(), "composed feature set");
        Ok(Self { features })
    }

    /// Returns true if the set contains the feature with `id`.
    #[must_use]
    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.iter().any(|f| f.id == id)
    }

    /// Returns true if the set contains `F`.
    #[must_use]
    pub fn contains_feature<F: Feature>(&self) -> bool {
        self.contains(F::DESCRIPTOR.id)
    }

    /// Returns true if every feature of `other` is in this set.
    #[must_use]
    pub fn is_superset_of(&self, other: &FeatureSet) -> bool {
        other.features.iter().all(|f| self.contains(f.id))
    }

    /// Returns the feature names in composition order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name).collect()
    }

    /// Iterates over the descriptors in composition order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.features.iter()
    }

    /// Returns the number of distinct features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
