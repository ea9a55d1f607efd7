//! Composite stores with dedicated slots for expected types.
//!
//! An [`ExpectData<E>`] is declared with a tuple `E` of types its consumer
//! will access often. Each distinct type in `E` gets its own slot; the slot
//! index of a type is an associated constant ([`SlotIndex::INDEX`]) computed
//! from the tags of `E` at compile time, so reaching it is a single indexed
//! load no matter how long `E` is. Types outside `E` live in an ordinary
//! [`CompositeData`].
//!
//! An expected type is stored either in its slot or nowhere, never in the
//! inner store as well, so the fast path and the generic path cannot
//! disagree.
//!
//! ```rust
//! use hinge_data::{CompositeData, Data, ExpectData};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct TimeStep(f64);
//! impl Data for TimeStep {
//!     const LABEL: &'static str = "example::TimeStep";
//! }
//!
//! let mut input = ExpectData::<(TimeStep,)>::new();
//! assert!(input.get::<TimeStep>().is_none());
//! input.insert(TimeStep(0.001));
//! assert_eq!(input.get::<TimeStep>(), Some(&TimeStep(0.001)));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::composite::{CompositeData, DataEntry, DataStatus, write_slot};
use crate::diagnostics::Diagnosis;
use crate::tag::{Data, DataTag};

/// A compile-time list of expected data types.
///
/// Implemented for tuples of up to 24 [`Data`] types.
pub trait ExpectList: 'static {
    /// Tags of the listed types, in declaration order, duplicates included.
    const TAGS: &'static [DataTag];

    /// Number of distinct tags, which is the number of slots allocated.
    const SLOT_COUNT: usize = distinct_count(Self::TAGS);
}

/// Counts the distinct tags in `tags`.
#[must_use]
pub const fn distinct_count(tags: &[DataTag]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < tags.len() {
        if first_occurrence(tags, i) {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Returns the slot of `tag`: its position among the distinct tags of `tags`.
#[must_use]
pub const fn slot_of(tags: &[DataTag], tag: DataTag) -> Option<usize> {
    let mut slot = 0;
    let mut i = 0;
    while i < tags.len() {
        if first_occurrence(tags, i) {
            if tags[i].raw() == tag.raw() {
                return Some(slot);
            }
            slot += 1;
        }
        i += 1;
    }
    None
}

const fn first_occurrence(tags: &[DataTag], index: usize) -> bool {
    let mut j = 0;
    while j < index {
        if tags[j].raw() == tags[index].raw() {
            return false;
        }
        j += 1;
    }
    true
}

/// Compile-time slot of `T` inside `ExpectData<E>`.
pub struct SlotIndex<E, T>(PhantomData<fn() -> (E, T)>);

impl<E: ExpectList, T: Data> SlotIndex<E, T> {
    /// `Some(slot)` if `T` is expected by `E`, `None` otherwise.
    pub const INDEX: Option<usize> = slot_of(E::TAGS, T::TAG);
}

macro_rules! impl_expect_list {
    ($($T:ident),*) => {
        impl<$($T: Data),*> ExpectList for ($($T,)*) {
            const TAGS: &'static [DataTag] = &[$(<$T as Data>::TAG),*];
        }
    };
}

macro_rules! impl_expect_lists {
    () => {
        impl_expect_list!();
    };
    ($head:ident $(, $tail:ident)*) => {
        impl_expect_list!($head $(, $tail)*);
        impl_expect_lists!($($tail),*);
    };
}

impl_expect_lists!(
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X
);

/// A composite store with dedicated slots for the types listed in `E`.
pub struct ExpectData<E: ExpectList> {
    slots: Box<[Option<DataEntry>]>,
    data: CompositeData,
    _expect: PhantomData<fn() -> E>,
}

impl<E: ExpectList> ExpectData<E> {
    /// Creates an empty store with one empty slot per distinct expected type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: (0..E::SLOT_COUNT).map(|_| None).collect(),
            data: CompositeData::new(),
            _expect: PhantomData,
        }
    }

    /// Creates a store holding the contents of `data`.
    #[must_use]
    pub fn from_composite(data: &CompositeData) -> Self {
        let mut store = Self::new();
        store.copy_from(data);
        store
    }

    /// Returns true if `T` has a dedicated slot.
    #[must_use]
    pub const fn expects<T: Data>() -> bool {
        SlotIndex::<E, T>::INDEX.is_some()
    }

    /// Builder method seeding the store with a value.
    #[must_use]
    pub fn with<T: Data>(mut self, value: T) -> Self {
        self.insert(value);
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
    /// Same semantics as [`CompositeData::insert_with`].
    pub fn insert_with<T: Data>(&mut self, value: T, required: bool) -> bool {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => {
                self.data.clear_missing(T::TAG);
                write_slot(&mut self.slots[slot], DataEntry::new(value, required))
            }
            None => self.data.insert_with(value, required),
        }
    }

    /// Reads `T`, marking the entry queried.
    pub fn get<T: Data>(&mut self) -> Option<&T> {
        self.get_mut::<T>().map(|value| &*value)
    }

    /// Mutably reads `T`, marking the entry queried.
    pub fn get_mut<T: Data>(&mut self) -> Option<&mut T> {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => {
                if self.slots[slot].is_none() {
                    self.data.note_missing(T::TAG, T::LABEL);
                    return None;
                }
                self.slots[slot].as_mut().and_then(DataEntry::query::<T>)
            }
            None => self.data.get_mut::<T>(),
        }
    }

    /// Returns the entry for `T`, inserting `make()` first if absent.
    ///
    /// # Panics
    ///
    /// Never in practice: the entry is ensured to hold a `T` before it is read.
    pub fn get_or_insert_with<T: Data>(&mut self, make: impl FnOnce() -> T) -> &mut T {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => {
                if !self.slots[slot].as_ref().is_some_and(DataEntry::is::<T>) {
                    self.insert(make());
                }
                self.slots[slot]
                    .as_mut()
                    .and_then(DataEntry::query::<T>)
                    .expect("slot was ensured to hold this type")
            }
            None => self.data.get_or_insert_with(make),
        }
    }

    /// Reads `T` without marking it queried.
    #[must_use]
    pub fn peek<T: Data>(&self) -> Option<&T> {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => self.slots[slot].as_ref().and_then(DataEntry::peek::<T>),
            None => self.data.peek::<T>(),
        }
    }

    /// Removes the entry for `T`, returning its value. No-op when absent.
    pub fn remove<T: Data>(&mut self) -> Option<T> {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => self.slots[slot].take().and_then(DataEntry::take::<T>),
            None => self.data.remove::<T>(),
        }
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
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => self.slots[slot]
                .as_ref()
                .map_or(DataStatus::ABSENT, DataEntry::status),
            None => self.data.status_of::<T>(),
        }
    }

    /// Marks the entry for `T` required. Returns false if there is no entry.
    pub fn make_required<T: Data>(&mut self) -> bool {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => match &mut self.slots[slot] {
                Some(entry) => {
                    entry.set_required();
                    true
                }
                None => false,
            },
            None => self.data.make_required::<T>(),
        }
    }

    /// Clears the queried flag of `T`. Returns false if there is no entry.
    pub fn unquery<T: Data>(&mut self) -> bool {
        match SlotIndex::<E, T>::INDEX {
            Some(slot) => match &mut self.slots[slot] {
                Some(entry) => {
                    entry.set_queried(false);
                    true
                }
                None => false,
            },
            None => self.data.unquery::<T>(),
        }
    }

    /// Clears every queried flag and forgets recorded misses.
    pub fn reset_queries(&mut self) {
        for entry in self.slots.iter_mut().flatten() {
            entry.set_queried(false);
        }
        self.data.reset_queries();
    }

    /// Replaces the contents of this store with a copy of `data`.
    pub fn copy_from(&mut self, data: &CompositeData) {
        self.clear();
        for (tag, entry) in data.entries() {
            match slot_of(E::TAGS, tag) {
                Some(slot) => self.slots[slot] = Some(entry.clone()),
                None => self.data.put_entry(tag, entry.clone()),
            }
        }
        self.data.copy_missing_from(data);
    }

    /// Overlays `data` onto this store with [`CompositeData::merge_from`]
    /// semantics.
    pub fn merge_from(&mut self, data: &CompositeData) {
        for (tag, entry) in data.entries() {
            match slot_of(E::TAGS, tag) {
                Some(slot) => {
                    self.data.clear_missing(tag);
                    write_slot(&mut self.slots[slot], entry.clone());
                }
                None => {
                    self.data.insert_entry(tag, entry.clone());
                }
            }
        }
    }

    /// Returns an equivalent plain composite store.
    #[must_use]
    pub fn to_composite(&self) -> CompositeData {
        let mut data = self.data.clone();
        for (tag, slot) in slot_tags::<E>().zip(self.slots.iter()) {
            if let Some(entry) = slot {
                data.put_entry(tag, entry.clone());
            }
        }
        data
    }

    /// Converts into an equivalent plain composite store.
    #[must_use]
    pub fn into_composite(self) -> CompositeData {
        self.to_composite()
    }

    /// Returns the number of entries, in slots and in the inner store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count() + self.data.len()
    }

    /// Returns true if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries no consumer has read.
    #[must_use]
    pub fn unqueried_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|e| !e.status().queried)
            .count()
            + self.data.unqueried_count()
    }

    /// Returns the labels of every entry, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = self.data.labels();
        labels.extend(self.slots.iter().flatten().map(DataEntry::label));
        labels.sort_unstable();
        labels
    }

    /// Removes every entry. Slots stay allocated.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.data.clear();
    }

    /// Reports write-without-read and read-without-provide mismatches.
    #[must_use]
    pub fn diagnose(&self) -> Diagnosis {
        let mut diagnosis = Diagnosis::default();
        for entry in self.slots.iter().flatten() {
            diagnosis.record(entry);
        }
        for (_, entry) in self.data.entries() {
            diagnosis.record(entry);
        }
        diagnosis.missing.extend(self.data.missing());
        diagnosis.sorted()
    }

    /// Emits [`Self::diagnose`] through `tracing`.
    pub fn log_diagnostics(&self) {
        self.diagnose().log();
    }
}

/// Tags owning a slot, in slot order.
fn slot_tags<E: ExpectList>() -> impl Iterator<Item = DataTag> {
    E::TAGS
        .iter()
        .enumerate()
        .filter(|&(i, _)| first_occurrence(E::TAGS, i))
        .map(|(_, tag)| *tag)
}

impl<E: ExpectList> Default for ExpectData<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExpectList> Clone for ExpectData<E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            data: self.data.clone(),
            _expect: PhantomData,
        }
    }
}

impl<E: ExpectList> From<CompositeData> for ExpectData<E> {
    fn from(data: CompositeData) -> Self {
        Self::from_composite(&data)
    }
}

impl<E: ExpectList> From<ExpectData<E>> for CompositeData {
    fn from(data: ExpectData<E>) -> Self {
        data.into_composite()
    }
}

impl<E: ExpectList> fmt::Debug for ExpectData<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectData")
            .field("slots", &self.slots)
            .field("data", &self.data)
            .finish()
    }
}
