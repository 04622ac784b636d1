// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the widget tree: identifiers, flags, and hook events.

/// Identifier for a widget in the tree (generational).
///
/// A `WidgetId` stays valid until the widget is destroyed; after that,
/// lookups fail and every operation taking the id becomes a no-op. Ids are
/// never implicitly reassigned to a different widget.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Widget flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Widget is visible (participates in painting and hit testing).
        const VISIBLE  = 0b0000_0001;
        /// Widget is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Fired on a container when a child was appended.
///
/// These hook events are ordinary typed events on the container's own
/// callback storage; they replace the overridable per-index virtual methods
/// a subclass-based design would use.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChildAdded {
    /// Index of the new child in the container's child order.
    pub index: usize,
}

/// Fired on a container when a child is about to be erased from its child
/// order (the index is still valid while listeners run).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChildRemoved {
    /// Index the child occupied in the container's child order.
    pub index: usize,
}

/// Fired on a container when a child reported a size or position change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChildUpdated {
    /// Index of the child in the container's child order.
    pub index: usize,
}

/// Fired on a container when a child (or a descendant below it) requested a
/// redraw; forwarded up the ancestor chain so the root hears about every
/// repaint-worthy change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChildDrawRequested {
    /// Index of the child in the container's child order.
    pub index: usize,
}
