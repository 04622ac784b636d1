// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Events: the portable event model consumed by the widget tree.
//!
//! ## Overview
//!
//! Platform adapters (Win32/X11/Wayland/Cocoa message pumps) normalize raw OS
//! messages into the value types defined here before anything else in
//! Overstory sees them. Each distinct event shape is its own type, so
//! listeners subscribe per shape and the dispatch layer never inspects
//! payloads it does not understand.
//!
//! Events are immutable records. They carry no identity beyond their field
//! values; they are produced, consumed, and discarded — never stored
//! long-term.
//!
//! ## Coordinate space
//!
//! Positions are expressed in the coordinate space of the widget an event is
//! delivered to. Adapters deliver root-space coordinates (DPI scaling and
//! window-chrome offsets already applied); containers translate positions as
//! dispatch recurses into children.
//!
//! ## The [`Event`] enum
//!
//! [`Event`] is the one normalized value an adapter hands over per
//! occurrence, and the element type carried by cross-thread event queues.
//! `From` impls exist for every shape, so producers can write
//! `queue.push(PointerMoved { position }.into())`.
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod keyboard;
mod pointer;
mod window;

pub use event::Event;
pub use keyboard::{KeyCode, KeyPressed, KeyReleased, Modifiers};
pub use pointer::{
    PointerButton, PointerEntered, PointerLeft, PointerMoved, PointerPressed, PointerReleased,
    WheelScrolled,
};
pub use window::{CloseRequested, FocusGained, FocusLost, WindowResized};
