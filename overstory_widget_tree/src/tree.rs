// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, child management, change
//! propagation.

use std::sync::Arc;

use kurbo::Rect;
use overstory_callbacks::{CallbackId, CallbackStorage, TypeCatalog};
use overstory_events::PointerLeft;

use crate::error::{Error, Result};
use crate::types::{
    ChildAdded, ChildDrawRequested, ChildRemoved, ChildUpdated, WidgetFlags, WidgetId,
};

/// The widget arena and everything that routes through it.
///
/// All widgets of a window live in one `WidgetTree`; the tree owns their
/// storage, and [`WidgetId`]s are generational handles into it. Slots are
/// recycled but generations are not, so a destroyed widget's id can never
/// silently address its successor.
///
/// Structural operations (`add_child`, `remove_child`, `destroy`) and the
/// dispatch entry points all tolerate stale ids by reporting `false` or
/// `None`. The one deliberate exception is
/// [`add_callback`](WidgetTree::add_callback), where silently discarding a
/// listener would be worse than an error.
pub struct WidgetTree {
    /// slots
    slots: Vec<Option<WidgetNode>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    catalog: Arc<TypeCatalog>,
}

impl core::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|n| n.is_some()).count();
        f.debug_struct("WidgetTree")
            .field("widgets_total", &total)
            .field("widgets_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub(crate) struct WidgetNode {
    generation: u32,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) bounds: Rect,
    pub(crate) flags: WidgetFlags,
    pub(crate) callbacks: CallbackStorage,
    /// `Some` for containers, `None` for leaves.
    pub(crate) container: Option<ContainerState>,
}

/// Transient dispatch state of one container.
#[derive(Debug, Default)]
pub(crate) struct ContainerState {
    /// Child order is hit-test order: first match wins.
    pub(crate) children: Vec<WidgetId>,
    /// The child currently under the pointer, if any.
    pub(crate) hover: Option<WidgetId>,
    /// The child that most recently received a press, if any.
    pub(crate) last_clicked: Option<WidgetId>,
    /// Re-entrancy guard for change notifications.
    pub(crate) busy: bool,
}

impl WidgetTree {
    /// Create an empty tree using the process-global type catalog.
    pub fn new() -> Self {
        Self::with_catalog(Arc::clone(TypeCatalog::global()))
    }

    /// Create an empty tree with an explicit type catalog.
    ///
    /// Every widget's callback storage is created against this catalog, so
    /// all widgets of the tree agree on event-type indices.
    pub fn with_catalog(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            catalog,
        }
    }

    /// The catalog shared by every widget in this tree.
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// Insert a leaf widget. The widget starts detached; link it with
    /// [`WidgetTree::add_child`].
    pub fn insert_leaf(&mut self, bounds: Rect) -> WidgetId {
        self.insert(bounds, None)
    }

    /// Insert a container widget. The widget starts detached and childless.
    pub fn insert_container(&mut self, bounds: Rect) -> WidgetId {
        self.insert(bounds, Some(ContainerState::default()))
    }

    fn insert(&mut self, bounds: Rect, container: Option<ContainerState>) -> WidgetId {
        let callbacks = CallbackStorage::with_catalog(Arc::clone(&self.catalog));
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.slots.push(None);
            self.generations.push(1);
            (self.slots.len() - 1, 1)
        };
        self.slots[idx] = Some(WidgetNode {
            generation,
            parent: None,
            bounds,
            flags: WidgetFlags::default(),
            callbacks,
            container,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "WidgetId uses 32-bit indices by design."
        )]
        WidgetId::new(idx as u32, generation)
    }

    /// Destroy a widget, freeing its slot.
    ///
    /// The widget is first unlinked from its parent with full
    /// [`remove_child`](WidgetTree::remove_child) semantics (synthetic
    /// leave, hover/click cleanup, removal hook). Its children are detached
    /// but not destroyed, since application code may still hold their ids.
    pub fn destroy(&mut self, id: WidgetId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(parent) = self.parent_of(id) {
            self.remove_child(parent, id);
        }
        let children: Vec<WidgetId> = self.children_of(id).to_vec();
        for child in children {
            if let Some(node) = self.node_mut(child) {
                node.parent = None;
            }
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        true
    }

    // --- accessors ---

    /// Returns true if `id` refers to a live widget of this tree.
    pub fn is_alive(&self, id: WidgetId) -> bool {
        self.node(id).is_some()
    }

    /// Returns true if `id` is a live container.
    pub fn is_container(&self, id: WidgetId) -> bool {
        self.node(id).is_some_and(|n| n.container.is_some())
    }

    /// Bounds of a live widget, in its parent's coordinate space.
    pub fn bounds(&self, id: WidgetId) -> Option<Rect> {
        self.node(id).map(|n| n.bounds)
    }

    /// Flags of a live widget.
    pub fn flags(&self, id: WidgetId) -> Option<WidgetFlags> {
        self.node(id).map(|n| n.flags)
    }

    /// Parent of a live widget, or `None` for detached widgets and stale
    /// ids.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a live container, in hit-test order; empty for leaves
    /// and stale ids.
    pub fn children_of(&self, id: WidgetId) -> &[WidgetId] {
        self.container(id)
            .map_or(&[], |state| state.children.as_slice())
    }

    /// Number of children of a live container.
    pub fn child_count(&self, id: WidgetId) -> usize {
        self.children_of(id).len()
    }

    /// Index of `child` in `parent`'s child order.
    pub fn child_index(&self, parent: WidgetId, child: WidgetId) -> Option<usize> {
        self.container(parent)?
            .children
            .iter()
            .position(|&c| c == child)
    }

    /// The child currently hovered in a container, if any.
    pub fn hover_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.container(id)?.hover
    }

    /// The child that most recently received a press in a container, if
    /// any. Not cleared by releases; cleared when the child is removed.
    pub fn last_clicked_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.container(id)?.last_clicked
    }

    /// Update a widget's bounds, notifying its parent on change.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Rect) {
        if let Some(node) = self.node_mut(id)
            && node.bounds != bounds
        {
            node.bounds = bounds;
            let _ = self.notify_layout_changed(id);
        }
    }

    /// Update a widget's flags, requesting a redraw on change.
    pub fn set_flags(&mut self, id: WidgetId, flags: WidgetFlags) {
        if let Some(node) = self.node_mut(id)
            && node.flags != flags
        {
            node.flags = flags;
            let _ = self.request_redraw(id);
        }
    }

    // --- child management ---

    /// Append `child` to `parent`'s child order.
    ///
    /// No-op (returning `false`) when either id is stale, `parent` is not a
    /// container, the child is already present (duplicate adds leave the
    /// child count unchanged), or the link would create a cycle. A child
    /// currently linked under another container is reparented: it is
    /// removed there first, with full removal semantics.
    ///
    /// On success the child's parent back-reference is set, a
    /// [`ChildAdded`] hook fires on the container, and a redraw is
    /// requested.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        if parent == child || !self.is_container(parent) || !self.is_alive(child) {
            return false;
        }
        if self.child_index(parent, child).is_some() {
            tracing::trace!(?parent, ?child, "duplicate add ignored");
            return false;
        }
        // Refuse links that would make `child` its own ancestor.
        let mut ancestor = self.parent_of(parent);
        while let Some(a) = ancestor {
            if a == child {
                tracing::trace!(?parent, ?child, "add would create a cycle");
                return false;
            }
            ancestor = self.parent_of(a);
        }
        if let Some(previous) = self.parent_of(child) {
            self.remove_child(previous, child);
        }

        let index = {
            let Some(state) = self.container_mut(parent) else {
                return false;
            };
            state.children.push(child);
            state.children.len() - 1
        };
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        self.trigger_on(parent, &ChildAdded { index });
        let _ = self.request_redraw(parent);
        true
    }

    /// Unlink `child` from `parent` without destroying it.
    ///
    /// No-op (returning `false`) if `child` is not currently a child of
    /// `parent`. If the child is the container's current hover, a synthetic
    /// leave is dispatched first so every enter keeps its matching leave;
    /// `hover` and `last_clicked` references to the child are cleared. The
    /// child's parent back-reference is cleared, a [`ChildRemoved`] hook
    /// fires, the child is erased from the order, and a redraw is
    /// requested.
    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        let Some(index) = self.child_index(parent, child) else {
            return false;
        };

        let was_hover = self.container(parent).is_some_and(|s| s.hover == Some(child));
        if was_hover {
            self.dispatch_pointer_leave(child, &PointerLeft);
            if let Some(state) = self.container_mut(parent) {
                state.hover = None;
            }
        }
        if let Some(state) = self.container_mut(parent)
            && state.last_clicked == Some(child)
        {
            state.last_clicked = None;
        }

        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
        self.trigger_on(parent, &ChildRemoved { index });
        if let Some(state) = self.container_mut(parent) {
            state.children.remove(index);
        }
        let _ = self.request_redraw(parent);
        true
    }

    /// Move `child` to the front of `parent`'s order (hit-tested first,
    /// painted last, i.e. topmost).
    pub fn bring_to_front(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        let Some(index) = self.child_index(parent, child) else {
            return false;
        };
        if index != 0 {
            if let Some(state) = self.container_mut(parent) {
                state.children.remove(index);
                state.children.insert(0, child);
            }
            let _ = self.request_redraw(parent);
        }
        true
    }

    /// Move `child` to the back of `parent`'s order (hit-tested last,
    /// painted first, i.e. bottommost).
    pub fn send_to_back(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        let Some(index) = self.child_index(parent, child) else {
            return false;
        };
        let last = self.child_count(parent) - 1;
        if index != last {
            if let Some(state) = self.container_mut(parent) {
                state.children.remove(index);
                state.children.push(child);
            }
            let _ = self.request_redraw(parent);
        }
        true
    }

    // --- callbacks ---

    /// Register a callback on a widget for events of type `E`.
    ///
    /// Returns the process-unique registration id. Fails on a stale widget
    /// id, or if the underlying storage could not grow a slot for a newly
    /// observed event type.
    pub fn add_callback<E: 'static>(
        &mut self,
        id: WidgetId,
        callback: impl FnMut(&E) -> bool + 'static,
    ) -> Result<CallbackId> {
        let Some(node) = self.node_mut(id) else {
            return Err(Error::StaleWidget);
        };
        Ok(node.callbacks.add_callback(callback)?)
    }

    /// Remove a registration from a widget. No-op on stale ids and absent
    /// registrations.
    pub fn remove_callback<E: 'static>(&mut self, id: WidgetId, callback: CallbackId) {
        if let Some(node) = self.node_mut(id) {
            node.callbacks.remove_callback::<E>(callback);
        }
    }

    /// Fire an arbitrary typed event at a widget's own listeners.
    ///
    /// Returns `true` if at least one listener was registered for `E`.
    /// This is how window-level events (`WindowResized`, focus changes) and
    /// application-defined semantic events reach their subscribers.
    pub fn trigger_callbacks<E: 'static>(&mut self, id: WidgetId, event: &E) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let had_listeners = node.callbacks.registry::<E>().is_some_and(|r| !r.is_empty());
        node.callbacks.trigger(event);
        had_listeners
    }

    /// Number of callbacks a widget has registered for `E`.
    pub fn callback_count<E: 'static>(&self, id: WidgetId) -> usize {
        self.node(id).map_or(0, |n| n.callbacks.callback_count::<E>())
    }

    /// A widget's callback storage, for advanced use.
    pub fn callbacks(&self, id: WidgetId) -> Option<&CallbackStorage> {
        self.node(id).map(|n| &n.callbacks)
    }

    /// Mutable access to a widget's callback storage.
    pub fn callbacks_mut(&mut self, id: WidgetId) -> Option<&mut CallbackStorage> {
        self.node_mut(id).map(|n| &mut n.callbacks)
    }

    /// Fire a hook event ignoring listener presence.
    pub(crate) fn trigger_on<E: 'static>(&mut self, id: WidgetId, event: &E) {
        if let Some(node) = self.node_mut(id) {
            node.callbacks.trigger(event);
        }
    }

    // --- change propagation ---

    /// Ask the ancestors of `id` to repaint it.
    ///
    /// Walks up from the widget's parent: each container fires its
    /// [`ChildDrawRequested`] hook (guarded by its `busy` flag) and
    /// forwards the request to its own parent. Returns `false` (a dropped
    /// request) for detached widgets or when the parent is already
    /// processing a notification.
    pub fn request_redraw(&mut self, id: WidgetId) -> bool {
        let Some(parent) = self.parent_of(id) else {
            tracing::trace!(?id, "redraw request from a detached widget dropped");
            return false;
        };
        self.forward_draw_request(parent, id)
    }

    fn forward_draw_request(&mut self, container: WidgetId, child: WidgetId) -> bool {
        let Some(index) = self.child_index(container, child) else {
            return false;
        };
        {
            let Some(state) = self.container_mut(container) else {
                return false;
            };
            if state.busy {
                tracing::trace!(?container, "draw request dropped while busy");
                return false;
            }
            state.busy = true;
        }
        self.trigger_on(container, &ChildDrawRequested { index });
        if let Some(grandparent) = self.parent_of(container) {
            let _ = self.forward_draw_request(grandparent, container);
        }
        if let Some(state) = self.container_mut(container) {
            state.busy = false;
        }
        true
    }

    /// Tell the parent of `id` that the widget's size or position changed.
    ///
    /// The parent fires its [`ChildUpdated`] hook (guarded by `busy`) and a
    /// draw request is then forwarded up from the parent. Returns `false`
    /// for detached widgets or when the parent is busy.
    pub fn notify_layout_changed(&mut self, id: WidgetId) -> bool {
        let Some(parent) = self.parent_of(id) else {
            tracing::trace!(?id, "layout notification from a detached widget dropped");
            return false;
        };
        let Some(index) = self.child_index(parent, id) else {
            return false;
        };
        {
            let Some(state) = self.container_mut(parent) else {
                return false;
            };
            if state.busy {
                tracing::trace!(?parent, "layout notification dropped while busy");
                return false;
            }
            state.busy = true;
        }
        self.trigger_on(parent, &ChildUpdated { index });
        if let Some(grandparent) = self.parent_of(parent) {
            let _ = self.forward_draw_request(grandparent, parent);
        }
        if let Some(state) = self.container_mut(parent) {
            state.busy = false;
        }
        true
    }

    // --- internals ---

    pub(crate) fn node(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.slots
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|n| n.generation == id.1)
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.slots
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|n| n.generation == id.1)
    }

    pub(crate) fn container(&self, id: WidgetId) -> Option<&ContainerState> {
        self.node(id)?.container.as_ref()
    }

    pub(crate) fn container_mut(&mut self, id: WidgetId) -> Option<&mut ContainerState> {
        self.node_mut(id)?.container.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }

    fn test_tree() -> WidgetTree {
        WidgetTree::with_catalog(Arc::new(TypeCatalog::new()))
    }

    #[test]
    fn widgets_start_detached() {
        let mut tree = test_tree();
        let w = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        assert!(tree.is_alive(w));
        assert!(!tree.is_container(w));
        assert_eq!(tree.parent_of(w), None);
        assert_eq!(tree.bounds(w), Some(rect(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn add_child_links_and_fires_hook() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        let b = tree.insert_leaf(rect(20.0, 0.0, 30.0, 10.0));

        let added: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&added);
        tree.add_callback(root, move |e: &ChildAdded| {
            log.borrow_mut().push(e.index);
            false
        })
        .unwrap();

        assert!(tree.add_child(root, a));
        assert!(tree.add_child(root, b));
        assert_eq!(tree.parent_of(a), Some(root));
        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(*added.borrow(), vec![0, 1]);
    }

    #[test]
    fn duplicate_add_leaves_count_unchanged() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));

        assert!(tree.add_child(root, a));
        assert_eq!(tree.child_count(root), 1);
        assert!(!tree.add_child(root, a));
        assert_eq!(tree.child_count(root), 1);
    }

    #[test]
    fn add_rejects_self_cycles_and_non_containers() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let panel = tree.insert_container(rect(0.0, 0.0, 50.0, 50.0));
        let leaf = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));

        assert!(!tree.add_child(root, root));
        assert!(tree.add_child(root, panel));
        // Linking the ancestor under its descendant would be a cycle.
        assert!(!tree.add_child(panel, root));
        // Leaves take no children.
        assert!(!tree.add_child(leaf, panel));
    }

    #[test]
    fn add_reparents_from_previous_container() {
        let mut tree = test_tree();
        let first = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let second = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let child = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));

        assert!(tree.add_child(first, child));
        assert!(tree.add_child(second, child));
        assert_eq!(tree.child_count(first), 0);
        assert_eq!(tree.children_of(second), &[child]);
        assert_eq!(tree.parent_of(child), Some(second));
    }

    #[test]
    fn remove_clears_parent_and_fires_hook_with_live_index() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        let b = tree.insert_leaf(rect(20.0, 0.0, 30.0, 10.0));
        tree.add_child(root, a);
        tree.add_child(root, b);

        let removed: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&removed);
        tree.add_callback(root, move |e: &ChildRemoved| {
            log.borrow_mut().push(e.index);
            false
        })
        .unwrap();

        assert!(tree.remove_child(root, b));
        assert_eq!(*removed.borrow(), vec![1]);
        assert_eq!(tree.children_of(root), &[a]);
        assert_eq!(tree.parent_of(b), None);
        assert!(tree.is_alive(b));

        assert!(!tree.remove_child(root, b));
    }

    #[test]
    fn destroy_goes_stale_and_detaches_children() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let panel = tree.insert_container(rect(0.0, 0.0, 50.0, 50.0));
        let leaf = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.add_child(root, panel);
        tree.add_child(panel, leaf);

        assert!(tree.destroy(panel));
        assert!(!tree.is_alive(panel));
        assert_eq!(tree.child_count(root), 0);
        // The leaf survives, detached.
        assert!(tree.is_alive(leaf));
        assert_eq!(tree.parent_of(leaf), None);

        assert!(!tree.destroy(panel));
    }

    #[test]
    fn stale_ids_never_address_recycled_slots() {
        let mut tree = test_tree();
        let old = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.destroy(old);
        let new = tree.insert_leaf(rect(5.0, 5.0, 15.0, 15.0));

        assert_ne!(old, new);
        assert!(!tree.is_alive(old));
        assert!(tree.is_alive(new));
        assert_eq!(tree.bounds(old), None);
        assert!(matches!(
            tree.add_callback(old, |_: &ChildAdded| false),
            Err(Error::StaleWidget)
        ));
    }

    #[test]
    fn redraw_request_bubbles_through_every_ancestor() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let panel = tree.insert_container(rect(10.0, 10.0, 90.0, 90.0));
        let leaf = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.add_child(root, panel);
        tree.add_child(panel, leaf);

        let log: Rc<RefCell<Vec<(&'static str, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let at_panel = Rc::clone(&log);
        tree.add_callback(panel, move |e: &ChildDrawRequested| {
            at_panel.borrow_mut().push(("panel", e.index));
            false
        })
        .unwrap();
        let at_root = Rc::clone(&log);
        tree.add_callback(root, move |e: &ChildDrawRequested| {
            at_root.borrow_mut().push(("root", e.index));
            false
        })
        .unwrap();

        assert!(tree.request_redraw(leaf));
        assert_eq!(*log.borrow(), vec![("panel", 0), ("root", 0)]);
    }

    #[test]
    fn redraw_request_from_detached_widget_is_dropped() {
        let mut tree = test_tree();
        let loner = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        assert!(!tree.request_redraw(loner));
    }

    #[test]
    fn busy_container_drops_notifications() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let leaf = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.add_child(root, leaf);

        let fired = Rc::new(RefCell::new(0));
        let count = Rc::clone(&fired);
        tree.add_callback(root, move |_: &ChildDrawRequested| {
            *count.borrow_mut() += 1;
            false
        })
        .unwrap();

        tree.container_mut(root).unwrap().busy = true;
        assert!(!tree.request_redraw(leaf));
        assert!(!tree.notify_layout_changed(leaf));
        assert_eq!(*fired.borrow(), 0);

        tree.container_mut(root).unwrap().busy = false;
        assert!(tree.request_redraw(leaf));
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn layout_notification_fires_update_hook_then_forwards_draw() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let panel = tree.insert_container(rect(10.0, 10.0, 90.0, 90.0));
        let leaf = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.add_child(root, panel);
        tree.add_child(panel, leaf);

        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let updates = Rc::clone(&log);
        tree.add_callback(panel, move |_: &ChildUpdated| {
            updates.borrow_mut().push("panel updated");
            false
        })
        .unwrap();
        let draws = Rc::clone(&log);
        tree.add_callback(root, move |_: &ChildDrawRequested| {
            draws.borrow_mut().push("root draw");
            false
        })
        .unwrap();

        assert!(tree.notify_layout_changed(leaf));
        assert_eq!(*log.borrow(), vec!["panel updated", "root draw"]);
    }

    #[test]
    fn set_bounds_notifies_only_on_change() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let leaf = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.add_child(root, leaf);

        let updates = Rc::new(RefCell::new(0));
        let count = Rc::clone(&updates);
        tree.add_callback(root, move |_: &ChildUpdated| {
            *count.borrow_mut() += 1;
            false
        })
        .unwrap();

        tree.set_bounds(leaf, rect(0.0, 0.0, 20.0, 20.0));
        assert_eq!(tree.bounds(leaf), Some(rect(0.0, 0.0, 20.0, 20.0)));
        assert_eq!(*updates.borrow(), 1);

        // Same value: silent.
        tree.set_bounds(leaf, rect(0.0, 0.0, 20.0, 20.0));
        assert_eq!(*updates.borrow(), 1);
    }

    #[test]
    fn reordering_moves_children_within_the_scan_order() {
        let mut tree = test_tree();
        let root = tree.insert_container(rect(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        let b = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        let c = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));
        tree.add_child(root, a);
        tree.add_child(root, b);
        tree.add_child(root, c);

        assert!(tree.bring_to_front(root, c));
        assert_eq!(tree.children_of(root), &[c, a, b]);
        assert!(tree.send_to_back(root, a));
        assert_eq!(tree.children_of(root), &[c, b, a]);

        let stray = tree.insert_leaf(rect(0.0, 0.0, 1.0, 1.0));
        assert!(!tree.bring_to_front(root, stray));
    }

    #[test]
    fn callback_registration_roundtrip() {
        let mut tree = test_tree();
        let w = tree.insert_leaf(rect(0.0, 0.0, 10.0, 10.0));

        #[derive(Debug)]
        struct Custom(u32);

        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = tree
            .add_callback(w, move |e: &Custom| {
                *sink.borrow_mut() = e.0;
                false
            })
            .unwrap();
        assert_eq!(tree.callback_count::<Custom>(w), 1);

        assert!(tree.trigger_callbacks(w, &Custom(9)));
        assert_eq!(*seen.borrow(), 9);

        tree.remove_callback::<Custom>(w, id);
        assert_eq!(tree.callback_count::<Custom>(w), 0);
        assert!(!tree.trigger_callbacks(w, &Custom(10)));
        assert_eq!(*seen.borrow(), 9);
    }
}
