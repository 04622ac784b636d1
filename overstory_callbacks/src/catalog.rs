// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy assignment of dense indices to event types.

use core::any::TypeId;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use hashbrown::HashMap;

/// Dense index assigned to one event type by a [`TypeCatalog`].
///
/// Indices start at 0 and are handed out in first-observation order. Within
/// one catalog an index never changes once assigned, which is what lets
/// every [`CallbackStorage`](crate::CallbackStorage) sharing the catalog use
/// it directly as a slot offset. Indices are *not* stable across process
/// restarts (observation order differs run to run) and must never be
/// serialized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventTypeIndex(u32);

impl EventTypeIndex {
    /// The index as a slot offset.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Assigns each distinct event type a stable dense index, lazily.
///
/// The usual way to build this kind of multiplexer hides the counter in a
/// per-type static; here it is an explicit value so the sharing is visible
/// and tests can create isolated catalogs instead of fighting over process
/// state. [`TypeCatalog::global`] provides the process-wide default that
/// ordinary widget code uses without thinking about it.
///
/// The map is only consulted when a type is resolved; once a storage has
/// turned the index into a slot, triggering is pure vector indexing.
pub struct TypeCatalog {
    indices: Mutex<HashMap<TypeId, u32>>,
}

impl core::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("types", &self.len())
            .finish_non_exhaustive()
    }
}

impl TypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            indices: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide default catalog.
    pub fn global() -> &'static Arc<Self> {
        static GLOBAL: OnceLock<Arc<TypeCatalog>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Self::new()))
    }

    /// Resolve the index for `E`, assigning the next unused one on first
    /// observation.
    pub fn resolve<E: 'static>(&self) -> EventTypeIndex {
        self.resolve_type_id(TypeId::of::<E>())
    }

    /// Resolve the index for a raw [`TypeId`].
    pub fn resolve_type_id(&self, ty: TypeId) -> EventTypeIndex {
        let mut indices = self
            .indices
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "EventTypeIndex uses 32-bit indices by design."
        )]
        let next = indices.len() as u32;
        EventTypeIndex(*indices.entry(ty).or_insert(next))
    }

    /// Number of distinct event types observed so far.
    pub fn len(&self) -> usize {
        self.indices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no event type has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
