// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event shapes: buttons, motion, enter/leave, and wheel scrolling.

use kurbo::{Point, Vec2};

/// Identifies a pointer button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The middle (wheel) button.
    Middle,
    /// Any additional button, by platform-assigned number.
    Other(u8),
}

/// A pointer button went down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerPressed {
    /// The button that was pressed.
    pub button: PointerButton,
    /// Pointer position at press time.
    pub position: Point,
}

/// A pointer button came up.
///
/// The position may lie outside the widget the event is routed to: release
/// events follow the press target, not the pointer (drag-release semantics).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerReleased {
    /// The button that was released.
    pub button: PointerButton,
    /// Pointer position at release time.
    pub position: Point,
}

/// The pointer moved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerMoved {
    /// The new pointer position.
    pub position: Point,
}

/// The pointer entered a widget's bounds.
///
/// Synthesized by containers on hover transitions; a [`PointerMoved`] with
/// the current position follows immediately.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PointerEntered;

/// The pointer left a widget's bounds.
///
/// Synthesized by containers on hover transitions, and also when a hovered
/// widget is removed from the tree; there is no meaningful position in that
/// case, so the shape carries none.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PointerLeft;

/// The scroll wheel (or trackpad) scrolled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelScrolled {
    /// Scroll offset. Positive `y` scrolls content up, positive `x` right.
    pub delta: Vec2,
}
