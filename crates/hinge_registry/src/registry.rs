//! The entity registry.
//!
//! An [`EntityRegistry`] is the arena a backend keeps its native objects in.
//! Each slot records the entity's kind, its parent link and a composite
//! store of backend metadata alongside the native object.
//!
//! Ids are never reused: removing an entity retires its id for the lifetime
//! of the registry.

// Ids index the slot vector directly; we target 64-bit systems.
#![allow(clippy::cast_possible_truncation)]

use std::collections::BTreeMap;
use std::sync::Arc;

use hinge_data::CompositeData;
use hinge_foundation::{EntityId, EntityKind, Error, Identity, Result};

use crate::config::RegistryConfig;
use crate::holder::Holder;

#[derive(Debug, Clone)]
struct Slot<N> {
    kind: EntityKind,
    holder: Holder<N>,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    metadata: CompositeData,
}

impl<N> Slot<N> {
    fn new(kind: EntityKind, holder: Holder<N>, parent: Option<EntityId>) -> Self {
        Self {
            kind,
            holder,
            parent,
            children: Vec::new(),
            metadata: CompositeData::new(),
        }
    }
}

/// Maps entity ids to backend-native objects and records the hierarchy.
#[derive(Debug, Clone)]
pub struct EntityRegistry<N> {
    /// Slot for each id ever allocated; `None` once retired.
    slots: Vec<Option<Slot<N>>>,
    /// Next id to allocate. Id 0 is reserved for the engine root.
    next_id: u64,
    root_reserved: bool,
    live_count: usize,
    config: RegistryConfig,
}

impl<N> Default for EntityRegistry<N> {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<N> EntityRegistry<N> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.capacity),
            next_id: 1,
            root_reserved: false,
            live_count: 0,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Reserves the root world slot at id 0 and returns its identity.
    ///
    /// Calling this again returns the same identity without touching the slot.
    /// Once the root has been removed its id stays retired, and this returns
    /// [`Identity::INVALID`].
    pub fn initiate_engine(&mut self) -> Identity {
        if !self.root_reserved {
            self.root_reserved = true;
            self.put(EntityId::ROOT, Slot::new(EntityKind::World, Holder::Placeholder, None));
            tracing::debug!(id = %EntityId::ROOT, "reserved engine root");
        } else if !self.contains(EntityId::ROOT) {
            tracing::debug!(id = %EntityId::ROOT, "engine root was removed");
            return Identity::INVALID;
        }
        Identity::new(EntityId::ROOT)
    }

    /// Reserves a placeholder slot for an object that will be bound later.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DanglingParent`](hinge_foundation::ErrorKind::DanglingParent)
    /// if `parent` was never issued, or if it was retired and the
    /// configuration rejects dangling parents.
    pub fn reserve(&mut self, parent: Option<EntityId>, kind: EntityKind) -> Result<Identity> {
        self.allocate(parent, kind, Holder::Placeholder)
    }

    /// Registers a native object.
    ///
    /// If `parent` names an unbound placeholder of the same kind, the object
    /// fills that placeholder and the placeholder's identity is returned.
    /// Otherwise a fresh id is allocated with `parent` recorded as its parent.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DanglingParent`](hinge_foundation::ErrorKind::DanglingParent)
    /// if `parent` was never issued, or if it was retired and the
    /// configuration rejects dangling parents.
    pub fn register(
        &mut self,
        parent: Option<EntityId>,
        kind: EntityKind,
        holder: Holder<N>,
    ) -> Result<Identity> {
        if let Some(parent) = parent {
            let fills_placeholder = self
                .slot(parent)
                .is_some_and(|slot| slot.kind == kind && slot.holder.is_placeholder());
            if fills_placeholder && !holder.is_placeholder() {
                return self.backfill(parent, holder);
            }
        }
        self.allocate(parent, kind, holder)
    }

    /// Registers an object the registry will own.
    ///
    /// # Errors
    ///
    /// Same as [`Self::register`].
    pub fn register_owned(
        &mut self,
        parent: Option<EntityId>,
        kind: EntityKind,
        native: N,
    ) -> Result<Identity> {
        self.register(parent, kind, Holder::Owned(native))
    }

    /// Registers an object the backend also references.
    ///
    /// # Errors
    ///
    /// Same as [`Self::register`].
    pub fn register_shared(
        &mut self,
        parent: Option<EntityId>,
        kind: EntityKind,
        native: Arc<N>,
    ) -> Result<Identity> {
        self.register(parent, kind, Holder::Shared(native))
    }

    /// Binds an object to a reserved slot.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if `id` is unknown, or `AlreadyBound` if the
    /// slot already holds an object.
    pub fn backfill(&mut self, id: EntityId, holder: Holder<N>) -> Result<Identity> {
        let slot = self
            .slot_mut(id)
            .ok_or_else(|| Error::entity_not_found(id))?;
        if !slot.holder.is_placeholder() {
            return Err(Error::already_bound(id));
        }
        slot.holder = holder;
        tracing::debug!(%id, kind = %slot.kind, "backfilled placeholder");
        Ok(Identity::new(id))
    }

    /// Looks up a slot's holder.
    ///
    /// Unknown and retired ids yield `None`. A reserved slot yields
    /// [`Holder::Placeholder`].
    #[must_use]
    pub fn find(&self, id: EntityId) -> Option<&Holder<N>> {
        self.slot(id).map(|slot| &slot.holder)
    }

    /// Returns the bound object for `id`.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&N> {
        self.find(id).and_then(Holder::resolve)
    }

    /// Returns the bound object for `id` mutably.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut N> {
        self.slot_mut(id).and_then(|slot| slot.holder.resolve_mut())
    }

    /// Returns the bound object for `id`, checking its kind.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the id is unknown or unbound, or
    /// `WrongKind` if it names an entity of another kind.
    pub fn get_kind(&self, id: EntityId, kind: EntityKind) -> Result<&N> {
        let slot = self.slot(id).ok_or_else(|| Error::entity_not_found(id))?;
        if slot.kind != kind {
            return Err(Error::wrong_kind(id, kind, slot.kind));
        }
        slot.holder.resolve().ok_or_else(|| Error::entity_not_found(id))
    }

    /// Mutable counterpart of [`Self::get_kind`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_kind`]. A shared object that is referenced
    /// elsewhere is reported as `Unsupported`.
    pub fn get_kind_mut(&mut self, id: EntityId, kind: EntityKind) -> Result<&mut N> {
        let slot = self
            .slot_mut(id)
            .ok_or_else(|| Error::entity_not_found(id))?;
        if slot.kind != kind {
            return Err(Error::wrong_kind(id, kind, slot.kind));
        }
        match &mut slot.holder {
            Holder::Placeholder => Err(Error::entity_not_found(id)),
            Holder::Owned(native) => Ok(native),
            Holder::Shared(native) => Arc::get_mut(native)
                .ok_or_else(|| Error::unsupported(format!("mutating shared entity {id}"))),
        }
    }

    /// Returns the kind of `id`.
    #[must_use]
    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.slot(id).map(|slot| slot.kind)
    }

    /// Returns the recorded parent of `id`.
    #[must_use]
    pub fn parent_of(&self, id: EntityId) -> Option<EntityId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// Returns the live children of `id`, in registration order.
    #[must_use]
    pub fn children_of(&self, id: EntityId) -> &[EntityId] {
        self.slot(id).map_or(&[][..], |slot| slot.children.as_slice())
    }

    /// Returns the live children of `id` having `kind`.
    pub fn children_of_kind(
        &self,
        id: EntityId,
        kind: EntityKind,
    ) -> impl Iterator<Item = EntityId> + '_ {
        self.children_of(id)
            .iter()
            .copied()
            .filter(move |child| self.kind_of(*child) == Some(kind))
    }

    /// Returns the child → parent map of every live entity that has a parent.
    #[must_use]
    pub fn hierarchy(&self) -> BTreeMap<EntityId, EntityId> {
        self.iter_slots()
            .filter_map(|(id, slot)| slot.parent.map(|parent| (id, parent)))
            .collect()
    }

    /// Returns the backend metadata of `id`.
    #[must_use]
    pub fn metadata(&self, id: EntityId) -> Option<&CompositeData> {
        self.slot(id).map(|slot| &slot.metadata)
    }

    /// Returns the backend metadata of `id` mutably.
    pub fn metadata_mut(&mut self, id: EntityId) -> Option<&mut CompositeData> {
        self.slot_mut(id).map(|slot| &mut slot.metadata)
    }

    /// Removes `id` and every entity below it.
    ///
    /// Returns the number of entities removed. Their ids stay retired.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if `id` is unknown.
    pub fn remove(&mut self, id: EntityId) -> Result<usize> {
        let parent = self
            .slot(id)
            .ok_or_else(|| Error::entity_not_found(id))?
            .parent;

        if let Some(parent) = parent.and_then(|parent| self.slot_mut(parent)) {
            parent.children.retain(|child| *child != id);
        }

        let mut removed = 0;
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(slot) = self.slots.get_mut(next.raw() as usize).and_then(Option::take) {
                pending.extend(slot.children);
                removed += 1;
            }
        }
        self.live_count -= removed;

        tracing::debug!(%id, removed, "removed entity subtree");
        Ok(removed)
    }

    /// Returns true if `id` names a live slot, bound or reserved.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.slot(id).is_some()
    }

    /// Returns the number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterates over live ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.iter_slots().map(|(id, _)| id)
    }

    /// Iterates over live ids of one kind in allocation order.
    pub fn ids_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = EntityId> + '_ {
        self.iter_slots()
            .filter(move |(_, slot)| slot.kind == kind)
            .map(|(id, _)| id)
    }

    fn allocate(
        &mut self,
        parent: Option<EntityId>,
        kind: EntityKind,
        holder: Holder<N>,
    ) -> Result<Identity> {
        if let Some(parent) = parent.filter(|parent| !self.contains(*parent)) {
            // A never-issued id could later name an unrelated entity.
            if self.config.reject_dangling_parents || !self.was_issued(parent) {
                return Err(Error::dangling_parent(parent));
            }
            tracing::debug!(%parent, %kind, "recording retired parent");
        }

        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        let placeholder = holder.is_placeholder();

        // The parent is live or retired, never `id` itself.
        if let Some(parent) = parent.and_then(|parent| self.slot_mut(parent)) {
            parent.children.push(id);
        }
        self.put(id, Slot::new(kind, holder, parent));

        tracing::debug!(%id, %kind, ?parent, placeholder, "registered entity");
        Ok(Identity::new(id))
    }

    fn was_issued(&self, id: EntityId) -> bool {
        if id == EntityId::ROOT {
            self.root_reserved
        } else {
            id.raw() < self.next_id
        }
    }

    fn put(&mut self, id: EntityId, slot: Slot<N>) {
        let index = id.raw() as usize;
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(slot);
        self.live_count += 1;
    }

    fn slot(&self, id: EntityId) -> Option<&Slot<N>> {
        self.slots.get(id.raw() as usize).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: EntityId) -> Option<&mut Slot<N>> {
        self.slots.get_mut(id.raw() as usize).and_then(Option::as_mut)
    }

    fn iter_slots(&self) -> impl Iterator<Item = (EntityId, &Slot<N>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|slot| (EntityId::new(index as u64), slot))
        })
    }
}
