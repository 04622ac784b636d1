// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch entry points: routing normalized events through containers.
//!
//! ## Routing rules
//!
//! A leaf reached by any entry point fires its own listeners for that event
//! type and reports handled: a dispatched leaf *is* the target. Containers
//! route instead of firing their own listeners:
//!
//! - press: linear front-to-back scan, first containing child wins, the
//!   winner is recorded as the container's last-clicked child;
//! - release and key events: straight to the last-clicked child, wherever
//!   the pointer is now;
//! - motion: hit the containing child, synthesizing paired enter/leave
//!   events when the hover target changes;
//! - scroll: straight to the hovered child.
//!
//! Positions are translated into the child's coordinate space at each
//! recursion step. A miss at any level reports not-handled and is otherwise
//! invisible; a click on empty background is indistinguishable from no
//! click at all.

use kurbo::Point;
use overstory_events::{
    Event, KeyPressed, KeyReleased, PointerEntered, PointerLeft, PointerMoved, PointerPressed,
    PointerReleased, WheelScrolled,
};

use crate::tree::WidgetTree;
use crate::types::{WidgetFlags, WidgetId};
use crate::util::contains_inclusive;

impl WidgetTree {
    /// Route one normalized adapter event to `target` (typically the root
    /// container of a window).
    ///
    /// Pointer and key shapes go through the routing entry points below;
    /// window-level shapes fire `target`'s own listeners directly.
    pub fn dispatch(&mut self, target: WidgetId, event: &Event) -> bool {
        match event {
            Event::PointerPressed(e) => self.dispatch_pointer_press(target, e),
            Event::PointerReleased(e) => self.dispatch_pointer_release(target, e),
            Event::PointerMoved(e) => self.dispatch_pointer_move(target, e),
            Event::WheelScrolled(e) => self.dispatch_scroll(target, e),
            Event::KeyPressed(e) => self.dispatch_key_press(target, e),
            Event::KeyReleased(e) => self.dispatch_key_release(target, e),
            Event::WindowResized(e) => self.trigger_callbacks(target, e),
            Event::FocusGained(e) => self.trigger_callbacks(target, e),
            Event::FocusLost(e) => self.trigger_callbacks(target, e),
            Event::CloseRequested(e) => self.trigger_callbacks(target, e),
        }
    }

    /// Route a press. On a container, the first child containing the
    /// position is recorded as last-clicked and receives the (translated)
    /// press; hover state is not touched. Handled as soon as a target child
    /// is found.
    pub fn dispatch_pointer_press(&mut self, target: WidgetId, event: &PointerPressed) -> bool {
        let Some(node) = self.node(target) else {
            return false;
        };
        if node.container.is_none() {
            self.trigger_on(target, event);
            return true;
        }
        let Some(child) = self.hit_child(target, event.position) else {
            tracing::trace!(?target, position = ?event.position, "press missed every child");
            return false;
        };
        if let Some(state) = self.container_mut(target) {
            state.last_clicked = Some(child);
        }
        let translated = PointerPressed {
            button: event.button,
            position: self.to_child_space(child, event.position),
        };
        self.dispatch_pointer_press(child, &translated);
        true
    }

    /// Route a release to the last-clicked child, regardless of the current
    /// pointer position (drag past the widget still releases on the
    /// original target). Last-clicked is not cleared afterwards; a stale
    /// reference is dropped and reported not-handled.
    pub fn dispatch_pointer_release(&mut self, target: WidgetId, event: &PointerReleased) -> bool {
        let Some(node) = self.node(target) else {
            return false;
        };
        if node.container.is_none() {
            self.trigger_on(target, event);
            return true;
        }
        let Some(clicked) = self.live_last_clicked(target) else {
            tracing::trace!(?target, "release with no press target");
            return false;
        };
        let translated = PointerReleased {
            button: event.button,
            position: self.to_child_space(clicked, event.position),
        };
        self.dispatch_pointer_release(clicked, &translated)
    }

    /// Route a key press to the last-clicked child (keys follow the last
    /// interacted widget, not hover).
    pub fn dispatch_key_press(&mut self, target: WidgetId, event: &KeyPressed) -> bool {
        let Some(node) = self.node(target) else {
            return false;
        };
        if node.container.is_none() {
            self.trigger_on(target, event);
            return true;
        }
        let Some(clicked) = self.live_last_clicked(target) else {
            tracing::trace!(?target, "key press with no press target");
            return false;
        };
        self.dispatch_key_press(clicked, event)
    }

    /// Route a key release to the last-clicked child.
    pub fn dispatch_key_release(&mut self, target: WidgetId, event: &KeyReleased) -> bool {
        let Some(node) = self.node(target) else {
            return false;
        };
        if node.container.is_none() {
            self.trigger_on(target, event);
            return true;
        }
        let Some(clicked) = self.live_last_clicked(target) else {
            return false;
        };
        self.dispatch_key_release(clicked, event)
    }

    /// Route pointer motion, maintaining hover state.
    ///
    /// When the containing child changes, the old hover receives a leave
    /// and the new one an enter before the motion itself; when no child
    /// contains the position, any hover is left and cleared and the motion
    /// is not handled.
    pub fn dispatch_pointer_move(&mut self, target: WidgetId, event: &PointerMoved) -> bool {
        let Some(node) = self.node(target) else {
            return false;
        };
        if node.container.is_none() {
            self.trigger_on(target, event);
            return true;
        }
        match self.hit_child(target, event.position) {
            Some(child) => {
                let previous = self.container(target).and_then(|s| s.hover);
                if previous != Some(child) {
                    if let Some(prev) = previous {
                        self.dispatch_pointer_leave(prev, &PointerLeft);
                    }
                    if let Some(state) = self.container_mut(target) {
                        state.hover = Some(child);
                    }
                    self.dispatch_pointer_enter(child, &PointerEntered);
                }
                let translated = PointerMoved {
                    position: self.to_child_space(child, event.position),
                };
                self.dispatch_pointer_move(child, &translated);
                true
            }
            None => {
                let previous = self.container_mut(target).and_then(|s| s.hover.take());
                if let Some(prev) = previous {
                    self.dispatch_pointer_leave(prev, &PointerLeft);
                }
                false
            }
        }
    }

    /// Deliver an enter to a widget's own listeners.
    pub fn dispatch_pointer_enter(&mut self, target: WidgetId, event: &PointerEntered) -> bool {
        if !self.is_alive(target) {
            return false;
        }
        self.trigger_on(target, event);
        true
    }

    /// Deliver a leave, cascading inner-first through nested containers so
    /// every outstanding enter below gets its matching leave before this
    /// widget's own listeners run.
    pub fn dispatch_pointer_leave(&mut self, target: WidgetId, event: &PointerLeft) -> bool {
        if !self.is_alive(target) {
            return false;
        }
        if let Some(inner) = self.container_mut(target).and_then(|s| s.hover.take()) {
            self.dispatch_pointer_leave(inner, &PointerLeft);
        }
        self.trigger_on(target, event);
        true
    }

    /// Route a scroll to the hovered child; not handled when nothing is
    /// hovered.
    pub fn dispatch_scroll(&mut self, target: WidgetId, event: &WheelScrolled) -> bool {
        let Some(node) = self.node(target) else {
            return false;
        };
        if node.container.is_none() {
            self.trigger_on(target, event);
            return true;
        }
        let Some(hovered) = self.container(target).and_then(|s| s.hover) else {
            tracing::trace!(?target, "scroll with no hover target");
            return false;
        };
        if !self.is_alive(hovered) {
            if let Some(state) = self.container_mut(target) {
                state.hover = None;
            }
            return false;
        }
        self.dispatch_scroll(hovered, event)
    }

    // --- internals ---

    /// First child in scan order whose bounds contain `position`.
    fn hit_child(&self, container: WidgetId, position: Point) -> Option<WidgetId> {
        let state = self.container(container)?;
        state.children.iter().copied().find(|&child| {
            self.node(child).is_some_and(|n| {
                n.flags.contains(WidgetFlags::VISIBLE | WidgetFlags::PICKABLE)
                    && contains_inclusive(n.bounds, position)
            })
        })
    }

    /// The container's last-clicked child, dropping a stale reference.
    fn live_last_clicked(&mut self, container: WidgetId) -> Option<WidgetId> {
        let clicked = self.container(container)?.last_clicked?;
        if self.is_alive(clicked) {
            Some(clicked)
        } else {
            if let Some(state) = self.container_mut(container) {
                state.last_clicked = None;
            }
            None
        }
    }

    fn to_child_space(&self, child: WidgetId, position: Point) -> Point {
        let origin = self.node(child).map_or(Point::ZERO, |n| n.bounds.origin());
        Point::new(position.x - origin.x, position.y - origin.y)
    }
}
