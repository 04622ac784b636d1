// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased storage multiplexing one registry per event type.

use core::any::Any;
use std::sync::Arc;

use crate::catalog::TypeCatalog;
use crate::error::{Error, Result};
use crate::registry::{CallbackId, CallbackRegistry};

/// Heterogeneous callback store: one [`CallbackRegistry<E>`] per distinct
/// event type `E`, created lazily on first use.
///
/// Slots are addressed by the [`EventTypeIndex`](crate::EventTypeIndex) the
/// storage's [`TypeCatalog`] assigns to each type, so the trigger path costs
/// one vector index and one downcast, with no hashing. The slot table only ever
/// grows; an occupied slot never moves.
///
/// Each slot holds its registry as `Box<dyn Any>`. The downcast back to the
/// concrete registry type is keyed by the same catalog index that selected
/// the slot, so it cannot observe a mismatch in correct use; drop glue
/// destroys every registry exactly once when the storage is dropped or
/// [`cleared`](CallbackStorage::clear).
pub struct CallbackStorage {
    catalog: Arc<TypeCatalog>,
    slots: Vec<Option<Box<dyn Any>>>,
}

impl core::fmt::Debug for CallbackStorage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("CallbackStorage")
            .field("slots", &self.slots.len())
            .field("occupied", &occupied)
            .finish_non_exhaustive()
    }
}

impl CallbackStorage {
    /// Create a storage using the process-global [`TypeCatalog`].
    pub fn new() -> Self {
        Self::with_catalog(Arc::clone(TypeCatalog::global()))
    }

    /// Create a storage using an explicit catalog.
    ///
    /// Storages that exchange event-type indices (for example all widgets of
    /// one tree) must share a catalog.
    pub fn with_catalog(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            catalog,
            slots: Vec::new(),
        }
    }

    /// The catalog this storage resolves event types against.
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// Register a callback for events of type `E` and return its id.
    ///
    /// The id is unique across every storage and event type in the process.
    /// The only failure is running out of memory while growing the slot
    /// table for a newly observed type, surfaced as
    /// [`Error::SlotAllocation`], since swallowing it would silently disable the
    /// whole event category.
    pub fn add_callback<E: 'static>(
        &mut self,
        callback: impl FnMut(&E) -> bool + 'static,
    ) -> Result<CallbackId> {
        let index = self.catalog.resolve::<E>().as_usize();
        if index >= self.slots.len() {
            let additional = index + 1 - self.slots.len();
            self.slots
                .try_reserve(additional)
                .map_err(|_| Error::SlotAllocation { index })?;
            self.slots.resize_with(index + 1, || None);
        }

        let slot = self.slots[index].get_or_insert_with(|| Box::new(CallbackRegistry::<E>::new()));
        let registry = slot
            .downcast_mut::<CallbackRegistry<E>>()
            .expect("slot index is derived from the catalog index of E");

        let id = CallbackId::next();
        registry.add(id, callback);
        Ok(id)
    }

    /// Remove a registration. No-op if `E`'s slot was never created or the
    /// id is absent within it.
    pub fn remove_callback<E: 'static>(&mut self, id: CallbackId) {
        if let Some(registry) = self.registry_mut::<E>() {
            registry.remove(id);
        }
    }

    /// Fire `event` at every callback registered for `E`, in ascending-id
    /// order. No-op if the slot was never created (zero listeners).
    pub fn trigger<E: 'static>(&mut self, event: &E) {
        if let Some(registry) = self.registry_mut::<E>() {
            registry.trigger(event);
        }
    }

    /// The live registry for `E`, or `None` until first use.
    pub fn registry<E: 'static>(&self) -> Option<&CallbackRegistry<E>> {
        let index = self.catalog.resolve::<E>().as_usize();
        let slot = self.slots.get(index)?.as_ref()?;
        match slot.downcast_ref::<CallbackRegistry<E>>() {
            Some(registry) => Some(registry),
            None => {
                debug_assert!(false, "slot holds a registry of a different event type");
                None
            }
        }
    }

    /// Mutable access to the live registry for `E`, or `None` until first
    /// use.
    pub fn registry_mut<E: 'static>(&mut self) -> Option<&mut CallbackRegistry<E>> {
        let index = self.catalog.resolve::<E>().as_usize();
        let slot = self.slots.get_mut(index)?.as_mut()?;
        match slot.downcast_mut::<CallbackRegistry<E>>() {
            Some(registry) => Some(registry),
            None => {
                debug_assert!(false, "slot holds a registry of a different event type");
                None
            }
        }
    }

    /// Number of callbacks currently registered for `E`.
    pub fn callback_count<E: 'static>(&self) -> usize {
        self.registry::<E>().map_or(0, CallbackRegistry::len)
    }

    /// Drop every registry, releasing all slots.
    ///
    /// Registered ids become permanently stale; they are never reused.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for CallbackStorage {
    fn default() -> Self {
        Self::new()
    }
}
