// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard event shapes.

/// A platform-independent key identifier.
///
/// The numeric value is assigned by the platform adapter; this crate treats
/// it as opaque. Layout-aware mapping (scancode vs. keysym, dead keys, IME)
/// is adapter business and deliberately not modelled here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyCode(pub u32);

bitflags::bitflags! {
    /// Keyboard modifier state at the time of an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT   = 0b0000_0001;
        /// Either control key.
        const CONTROL = 0b0000_0010;
        /// Either alt/option key.
        const ALT     = 0b0000_0100;
        /// The command/windows/super key.
        const META    = 0b0000_1000;
    }
}

/// A key went down.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyPressed {
    /// The key that was pressed.
    pub key: KeyCode,
    /// Modifier state at press time.
    pub modifiers: Modifiers,
}

/// A key came up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyReleased {
    /// The key that was released.
    pub key: KeyCode,
    /// Modifier state at release time.
    pub modifiers: Modifiers,
}
