//! The composite data store.
//!
//! A [`CompositeData`] maps each [`DataTag`] to at most one entry. Entries
//! remember whether their provider marked them required and whether any
//! consumer has read them, so a diagnostic pass can spot data that was
//! written but never consumed, or requested but never provided.
//!
//! Stores are backed by a persistent map: cloning is O(1) and the clone
//! shares structure with its source until either side writes. Observably the
//! clone is a deep copy.

use std::any::Any;
use std::fmt;

use crate::diagnostics::Diagnosis;
use crate::tag::{Data, DataTag};

/// Object-safe view of a stored value.
pub(crate) trait DataValue: Any + Send + Sync {
    fn clone_value(&self) -> Box<dyn DataValue>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn label(&self) -> &'static str;
}

impl<T: Data> DataValue for T {
    fn clone_value(&self) -> Box<dyn DataValue> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn label(&self) -> &'static str {
        T::LABEL
    }
}

impl Clone for Box<dyn DataValue> {
    fn clone(&self) -> Self {
        self.clone_value()
    }
}

/// Presence and bookkeeping flags of one entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DataStatus {
    /// An entry exists.
    pub exists: bool,
    /// The provider marked the entry as required.
    pub required: bool,
    /// A consumer has read the entry since it was last written.
    pub queried: bool,
}

impl DataStatus {
    /// Status of an absent entry.
    pub const ABSENT: DataStatus = DataStatus {
        exists: false,
        required: false,
        queried: false,
    };
}

/// One slot of a composite store.
#[derive(Clone)]
pub(crate) struct DataEntry {
    value: Box<dyn DataValue>,
    required: bool,
    queried: bool,
}

impl DataEntry {
    pub(crate) fn new<T: Data>(value: T, required: bool) -> Self {
        Self {
            value: Box::new(value),
            required,
            queried: false,
        }
    }

    /// Returns true if the entry holds a `T`.
    pub(crate) fn is<T: Data>(&self) -> bool {
        self.value.as_any().is::<T>()
    }

    pub(crate) fn label(&self) -> &'static str {
        self.value.label()
    }

    pub(crate) fn status(&self) -> DataStatus {
        DataStatus {
            exists: true,
            required: self.required,
            queried: self.queried,
        }
    }

    /// Reads without touching the queried flag.
    pub(crate) fn peek<T: Data>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    /// Reads mutably and marks the entry queried.
    pub(crate) fn query<T: Data>(&mut self) -> Option<&mut T> {
        let value = self.value.as_any_mut().downcast_mut::<T>()?;
        self.queried = true;
        Some(value)
    }

    /// Replaces the value. Required is sticky, queried is cleared.
    pub(crate) fn overwrite(&mut self, incoming: DataEntry) {
        self.value = incoming.value;
        self.required |= incoming.required;
        self.queried = false;
    }

    pub(crate) fn take<T: Data>(self) -> Option<T> {
        self.value.into_any().downcast::<T>().ok().map(|value| *value)
    }

    pub(crate) fn set_required(&mut self) {
        self.required = true;
    }

    pub(crate) fn set_queried(&mut self, queried: bool) {
        self.queried = queried;
    }
}

impl fmt::Debug for DataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataEntry")
            .field("label", &self.label())
            .field("required", &self.required)
            .field("queried", &self.queried)
            .finish()
    }
}

/// Writes `incoming` into `slot`, returning whether an entry already existed.
pub(crate) fn write_slot(slot: &mut Option<DataEntry>, incoming: DataEntry) -> bool {
    match slot {
        Some(existing) => {
            existing.overwrite(incoming);
            true
        }
        None => {
            *slot = Some(incoming);
            false
        }
    }
}

/// A schema-free heterogeneous store holding at most one value per type.
#[derive(Clone, Default)]
pub struct CompositeData {
    entries: im::HashMap<DataTag, DataEntry>,
    /// Types a consumer asked for while they were absent.
    missing: im::HashMap<DataTag, &'static str>,
}

impl CompositeData {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method seeding the store with a value.
    #[must_use]
    pub fn with<T: Data>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Builder method seeding the store with a required value.
    #[must_use]
    pub fn with_required<T: Data>(mut self, value: T) -> Self {
        self.insert_with(value, true);
        self
    }

    /// Inserts or overwrites the entry for `T`.
    ///
    /// Returns whether an entry already existed.
    pub fn insert<T: Data>(&mut self, value: T) -> bool {
        self.insert_with(value, false)
    }

    /// Inserts or overwrites the entry for `T`, optionally marking it required.
    ///
    /// The queried flag is cleared. Once an entry is required it stays
    /// required across overwrites. Returns whether an entry already existed.
    pub fn insert_with<T: Data>(&mut self, value: T, required: bool) -> bool {
        self.insert_entry(T::TAG, DataEntry::new(value, required))
    }

    /// Reads `T`, marking the entry queried.
    ///
    /// Absence is an ordinary result; it is remembered for [`Self::diagnose`].
    pub fn get<T: Data>(&mut self) -> Option<&T> {
        self.get_mut::<T>().map(|value| &*value)
    }

    /// Mutably reads `T`, marking the entry queried.
    pub fn get_mut<T: Data>(&mut self) -> Option<&mut T> {
        let Some(entry) = self.entries.get(&T::TAG) else {
            self.note_missing(T::TAG, T::LABEL);
            return None;
        };
        if !entry.is::<T>() {
            tracing::warn!(
                label = T::LABEL,
                stored = entry.label(),
                "data tag holds a different type"
            );
            return None;
        }
        self.entries.get_mut(&T::TAG).and_then(DataEntry::query::<T>)
    }

    /// Returns the entry for `T`, inserting `make()` first if absent.
    ///
    /// The entry is marked queried.
    ///
    /// # Panics
    ///
    /// Never in practice: the entry is ensured to hold a `T` before it is read.
    pub fn get_or_insert_with<T: Data>(&mut self, make: impl FnOnce() -> T) -> &mut T {
        if !self.entries.get(&T::TAG).is_some_and(DataEntry::is::<T>) {
            self.insert(make());
        }
        self.get_mut::<T>()
            .expect("entry was ensured to hold this type")
    }

    /// Reads `T` without marking it queried.
    #[must_use]
    pub fn peek<T: Data>(&self) -> Option<&T> {
        self.entries.get(&T::TAG).and_then(DataEntry::peek::<T>)
    }

    /// Removes the entry for `T`, returning its value. No-op when absent.
    pub fn remove<T: Data>(&mut self) -> Option<T> {
        self.entries.remove(&T::TAG).and_then(DataEntry::take::<T>)
    }

    /// Returns true if an entry for `T` exists.
    #[must_use]
    pub fn has<T: Data>(&self) -> bool {
        self.status_of::<T>().exists
    }

    /// Returns true if the entry for `T` exists and is required.
    #[must_use]
    pub fn requires<T: Data>(&self) -> bool {
        self.status_of::<T>().required
    }

    /// Returns the flags of the entry for `T`.
    #[must_use]
    pub fn status_of<T: Data>(&self) -> DataStatus {
        self.status_of_tag(T::TAG)
    }

    /// Marks the entry for `T` required. Returns false if there is no entry.
    pub fn make_required<T: Data>(&mut self) -> bool {
        match self.entries.get_mut(&T::TAG) {
            Some(entry) => {
                entry.set_required();
                true
            }
            None => false,
        }
    }

    /// Clears the queried flag of `T`. Returns false if there is no entry.
    pub fn unquery<T: Data>(&mut self) -> bool {
        match self.entries.get_mut(&T::TAG) {
            Some(entry) => {
                entry.set_queried(false);
                true
            }
            None => false,
        }
    }

    /// Clears every queried flag and forgets recorded misses.
    pub fn reset_queries(&mut self) {
        for (_, entry) in self.entries.iter_mut() {
            entry.set_queried(false);
        }
        self.missing.clear();
    }

    /// Replaces the contents of this store with a copy of `other`.
    pub fn copy_from(&mut self, other: &CompositeData) {
        self.entries = other.entries.clone();
        self.missing = other.missing.clone();
    }

    /// Overlays `other` onto this store.
    ///
    /// Types present in `other` overwrite this store's entries (the queried
    /// flag is cleared, the required flag is combined). Types absent from
    /// `other` are left untouched.
    pub fn merge_from(&mut self, other: &CompositeData) {
        for (tag, entry) in other.entries() {
            self.insert_entry(tag, entry.clone());
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries no consumer has read.
    #[must_use]
    pub fn unqueried_count(&self) -> usize {
        self.entries().filter(|(_, e)| !e.status().queried).count()
    }

    /// Returns the labels of every entry, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<_> = self.entries().map(|(_, e)| e.label()).collect();
        labels.sort_unstable();
        labels
    }

    /// Removes every entry and forgets recorded misses.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.missing.clear();
    }

    /// Reports write-without-read and read-without-provide mismatches.
    #[must_use]
    pub fn diagnose(&self) -> Diagnosis {
        let mut diagnosis = Diagnosis::default();
        for (_, entry) in self.entries() {
            diagnosis.record(entry);
        }
        diagnosis.missing.extend(self.missing.values().copied());
        diagnosis.sorted()
    }

    /// Emits [`Self::diagnose`] through `tracing`.
    pub fn log_diagnostics(&self) {
        self.diagnose().log();
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (DataTag, &DataEntry)> + '_ {
        self.entries.iter().map(|(tag, entry)| (*tag, entry))
    }

    pub(crate) fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.missing.values().copied()
    }

    pub(crate) fn status_of_tag(&self, tag: DataTag) -> DataStatus {
        self.entries
            .get(&tag)
            .map_or(DataStatus::ABSENT, DataEntry::status)
    }

    pub(crate) fn insert_entry(&mut self, tag: DataTag, entry: DataEntry) -> bool {
        self.missing.remove(&tag);
        match self.entries.get_mut(&tag) {
            Some(existing) => {
                existing.overwrite(entry);
                true
            }
            None => {
                self.entries.insert(tag, entry);
                false
            }
        }
    }

    /// Stores `entry` as is, flags included.
    pub(crate) fn put_entry(&mut self, tag: DataTag, entry: DataEntry) {
        self.missing.remove(&tag);
        self.entries.insert(tag, entry);
    }

    pub(crate) fn note_missing(&mut self, tag: DataTag, label: &'static str) {
        self.missing.insert(tag, label);
    }

    pub(crate) fn clear_missing(&mut self, tag: DataTag) {
        self.missing.remove(&tag);
    }

    pub(crate) fn copy_missing_from(&mut self, other: &CompositeData) {
        self.missing = other.missing.clone();
    }
}

impl fmt::Debug for CompositeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries().map(|(_, entry)| entry))
            .finish()
    }
}
