//! How a registry slot holds its native object.

use std::sync::Arc;

/// A registry slot's native object.
#[derive(Debug, Clone, Default)]
pub enum Holder<N> {
    /// The slot is reserved but no object is bound yet.
    #[default]
    Placeholder,
    /// The registry owns the object exclusively.
    Owned(N),
    /// The object is shared with references the backend keeps elsewhere.
    Shared(Arc<N>),
}

impl<N> Holder<N> {
    /// Wraps an object the registry will own.
    #[must_use]
    pub fn owned(native: N) -> Self {
        Self::Owned(native)
    }

    /// Wraps an object the backend also references.
    #[must_use]
    pub fn shared(native: Arc<N>) -> Self {
        Self::Shared(native)
    }

    /// Returns true if no object is bound.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns the bound object.
    #[must_use]
    pub fn resolve(&self) -> Option<&N> {
        match self {
            Self::Placeholder => None,
            Self::Owned(native) => Some(native),
            Self::Shared(native) => Some(native),
        }
    }

    /// Returns the bound object mutably.
    ///
    /// A shared object is only reachable while the registry holds the sole
    /// reference to it.
    pub fn resolve_mut(&mut self) -> Option<&mut N> {
        match self {
            Self::Placeholder => None,
            Self::Owned(native) => Some(native),
            Self::Shared(native) => Arc::get_mut(native),
        }
    }
}

impl<N> From<N> for Holder<N> {
    fn from(native: N) -> Self {
        Self::Owned(native)
    }
}
