// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Widget Tree: a widget/container tree with deterministic event
//! dispatch.
//!
//! ## Overview
//!
//! This crate owns the interaction structure of a window: widgets with
//! bounds and listeners, containers that route normalized input events down
//! to the right child, and the change notifications that bubble back up so
//! the application can schedule repaints. It does no layout, no drawing,
//! and no platform work — adapters feed it [`Event`] values, a renderer
//! consumes its [`Painter`] traversal, everything in between lives here.
//!
//! ## Tree model
//!
//! Widgets live in a [`WidgetTree`] arena and are addressed by generational
//! [`WidgetId`]s, so a handle to a destroyed widget goes stale instead of
//! dangling: every operation on a stale id is a harmless no-op. Widgets are
//! created detached; [`WidgetTree::add_child`] links them under a container
//! and sets the (non-owning) parent back-reference,
//! [`WidgetTree::remove_child`] unlinks them without destroying them.
//!
//! Every widget owns one [`overstory_callbacks::CallbackStorage`], so
//! application code can subscribe to any typed event on any widget via
//! [`WidgetTree::add_callback`] — including event types this crate has
//! never heard of. All widgets of one tree share a type catalog.
//!
//! ## Dispatch model
//!
//! Containers route with a linear front-to-back scan of their children in
//! stored order; the first child whose bounds contain the position wins.
//! Child bounds are closed boxes in the parent's coordinate space, and
//! positions are translated as dispatch recurses. Callers wanting "topmost"
//! semantics keep the topmost child first ([`WidgetTree::bring_to_front`]).
//!
//! Per container, two pieces of transient state drive the routing state
//! machine:
//!
//! - the *last clicked* child receives release and key events, regardless
//!   of where the pointer has moved since the press (drag-release
//!   semantics);
//! - the *hover* child receives scroll events, and hover transitions
//!   synthesize paired [`PointerEntered`]/[`PointerLeft`] events — at most
//!   one child is hovered per container, and every enter is eventually
//!   matched by exactly one leave, either on move-out or on removal from
//!   the tree.
//!
//! Routing functions are total over a `handled` boolean: an empty container
//! or a missing press/hover target yields `false`, never an error.
//!
//! ## Change propagation
//!
//! [`WidgetTree::request_redraw`] and [`WidgetTree::notify_layout_changed`]
//! bubble from a widget to its ancestors. At each container level the
//! per-index hooks fire as ordinary typed events on the container's own
//! storage — [`ChildDrawRequested`] and [`ChildUpdated`] — and a draw
//! request is forwarded further up. An application listens on its root
//! container (together with [`ChildAdded`]/[`ChildRemoved`]) to schedule
//! repaints. A per-container `busy` flag drops re-entrant notifications
//! while one is being processed.
//!
//! ## Threading
//!
//! The tree is single-threaded by contract: all dispatch runs on the thread
//! that pumps events, one event fully processed before the next. Use
//! `overstory_event_queue` to hand events over from other threads.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use overstory_events::{PointerButton, PointerPressed};
//! use overstory_widget_tree::WidgetTree;
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert_container(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let button = tree.insert_leaf(Rect::new(10.0, 10.0, 90.0, 40.0));
//! tree.add_child(root, button);
//!
//! tree.add_callback(button, |e: &PointerPressed| {
//!     println!("pressed at {:?}", e.position);
//!     false
//! })
//! .unwrap();
//!
//! let handled = tree.dispatch_pointer_press(
//!     root,
//!     &PointerPressed {
//!         button: PointerButton::Left,
//!         position: Point::new(20.0, 20.0),
//!     },
//! );
//! assert!(handled);
//! assert_eq!(tree.last_clicked_of(root), Some(button));
//! ```

mod dispatch;
mod error;
mod paint;
mod tree;
mod types;
mod util;

pub use error::{Error, Result};
pub use overstory_callbacks::CallbackId;
pub use paint::Painter;
pub use tree::WidgetTree;
pub use types::{ChildAdded, ChildDrawRequested, ChildRemoved, ChildUpdated, WidgetFlags, WidgetId};

// The event shapes the dispatch entry points consume.
pub use overstory_events::{
    Event, KeyPressed, KeyReleased, PointerEntered, PointerLeft, PointerMoved, PointerPressed,
    PointerReleased, WheelScrolled,
};
