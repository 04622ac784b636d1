// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized event value delivered by platform adapters.

use crate::keyboard::{KeyPressed, KeyReleased};
use crate::pointer::{PointerMoved, PointerPressed, PointerReleased, WheelScrolled};
use crate::window::{CloseRequested, FocusGained, FocusLost, WindowResized};

/// One normalized occurrence, as delivered by a platform adapter.
///
/// This enum exists at the boundary: adapters and event queues traffic in
/// `Event`, while listener registration and dispatch always work with the
/// per-shape types the variants wrap. Enter/leave shapes are absent by
/// design: they are synthesized by containers during hover tracking, never
/// produced by an adapter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// A pointer button went down.
    PointerPressed(PointerPressed),
    /// A pointer button came up.
    PointerReleased(PointerReleased),
    /// The pointer moved.
    PointerMoved(PointerMoved),
    /// The wheel scrolled.
    WheelScrolled(WheelScrolled),
    /// A key went down.
    KeyPressed(KeyPressed),
    /// A key came up.
    KeyReleased(KeyReleased),
    /// The window was resized.
    WindowResized(WindowResized),
    /// The window gained focus.
    FocusGained(FocusGained),
    /// The window lost focus.
    FocusLost(FocusLost),
    /// The window was asked to close.
    CloseRequested(CloseRequested),
}

macro_rules! impl_from_shape {
    ($($shape:ident),* $(,)?) => {
        $(
            impl From<$shape> for Event {
                fn from(e: $shape) -> Self {
                    Self::$shape(e)
                }
            }
        )*
    };
}

impl_from_shape!(
    PointerPressed,
    PointerReleased,
    PointerMoved,
    WheelScrolled,
    KeyPressed,
    KeyReleased,
    WindowResized,
    FocusGained,
    FocusLost,
    CloseRequested,
);
