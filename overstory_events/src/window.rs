// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level event shapes.
//!
//! These are delivered to the root widget of a window; applications
//! subscribe to them like any other typed event.

use kurbo::Size;

/// The window's client area was resized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowResized {
    /// The new client-area size, in the root coordinate space.
    pub size: Size,
}

/// The window gained input focus.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FocusGained;

/// The window lost input focus.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FocusLost;

/// The user asked the window to close.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CloseRequested;
