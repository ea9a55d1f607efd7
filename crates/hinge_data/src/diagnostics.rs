//! Provider/consumer mismatch reporting.

use crate::composite::DataEntry;

/// Result of a diagnostic pass over a store.
///
/// Every list holds data labels, sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnosis {
    /// Required entries no consumer has read.
    pub unqueried_required: Vec<&'static str>,
    /// Optional entries no consumer has read.
    pub unqueried_optional: Vec<&'static str>,
    /// Entries that were provided and read.
    pub consumed: Vec<&'static str>,
    /// Types a consumer asked for that were never provided.
    pub missing: Vec<&'static str>,
}

impl Diagnosis {
    /// Returns true when nothing required went unread and nothing requested
    /// went unprovided.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unqueried_required.is_empty() && self.missing.is_empty()
    }

    pub(crate) fn record(&mut self, entry: &DataEntry) {
        let status = entry.status();
        let list = match (status.queried, status.required) {
            (true, _) => &mut self.consumed,
            (false, true) => &mut self.unqueried_required,
            (false, false) => &mut self.unqueried_optional,
        };
        list.push(entry.label());
    }

    pub(crate) fn sorted(mut self) -> Self {
        self.unqueried_required.sort_unstable();
        self.unqueried_optional.sort_unstable();
        self.consumed.sort_unstable();
        self.missing.sort_unstable();
        self.missing.dedup();
        self
    }

    pub(crate) fn log(&self) {
        for label in &self.unqueried_required {
            tracing::warn!(label, "required data was never read");
        }
        for label in &self.missing {
            tracing::warn!(label, "data was read but never provided");
        }
        tracing::debug!(
            consumed = self.consumed.len(),
            unqueried_optional = self.unqueried_optional.len(),
            "data diagnostics"
        );
    }
}
