//! Registry configuration.

/// Configuration for an [`EntityRegistry`](crate::EntityRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Reject registrations naming a parent id the registry does not know.
    ///
    /// When false, the parent link is recorded anyway and a debug event is
    /// logged.
    pub reject_dangling_parents: bool,

    /// Number of slots to allocate up front.
    pub capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reject_dangling_parents: false,
            capacity: 16,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that rejects dangling parents.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_dangling_parents: true,
            ..Self::default()
        }
    }

    /// Builder method to set dangling-parent rejection.
    #[must_use]
    pub fn with_reject_dangling_parents(mut self, reject: bool) -> Self {
        self.reject_dangling_parents = reject;
        self
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
