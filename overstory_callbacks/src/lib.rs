// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Callbacks: typed listener registries behind a type-erased store.
//!
//! ## Overview
//!
//! Widgets need to fire events of types the widget layer has never heard of —
//! a checkbox fires a toggle event, an application fires its own semantic
//! events — without the owning type knowing any of those concrete types.
//! This crate provides that mechanism in three layers:
//!
//! - [`CallbackRegistry<E>`]: an ordered map from [`CallbackId`] to a
//!   `FnMut(&E) -> bool` closure for one event type. Triggering walks the
//!   entries in ascending-id order; a callback returning `true` is removed
//!   after the call ("auto-removal").
//! - [`CallbackStorage`]: one registry per distinct event type, stored
//!   type-erased and addressed by a dense per-type index, so the hot trigger
//!   path is an O(1) vector index rather than a hash lookup.
//! - [`TypeCatalog`]: the authority that assigns those indices, lazily, the
//!   first time a type is observed. Every storage sharing a catalog agrees
//!   on indices. A process-global catalog is the default; tests can inject
//!   fresh ones.
//!
//! ## Registration ids
//!
//! [`CallbackId`]s are unique across every registry, every storage, and
//! every event type in the process, and are never reused after removal, so a
//! stale id can never reactivate someone else's listener. Zero is reserved
//! as the invalid sentinel and is unrepresentable (`NonZeroU64`).
//!
//! ## Destruction
//!
//! Each registry is created lazily on first use per storage and destroyed
//! exactly once when the owning storage is dropped or cleared; the box's
//! drop glue stands in for the per-slot destructor a manually type-erased
//! implementation would have to store.
//!
//! ## Example
//!
//! ```
//! use overstory_callbacks::CallbackStorage;
//!
//! #[derive(Debug)]
//! struct Toggled {
//!     on: bool,
//! }
//!
//! let mut storage = CallbackStorage::new();
//! let id = storage
//!     .add_callback(|e: &Toggled| {
//!         println!("toggled: {}", e.on);
//!         false // keep the listener registered
//!     })
//!     .unwrap();
//!
//! storage.trigger(&Toggled { on: true });
//! storage.remove_callback::<Toggled>(id);
//! ```

mod catalog;
mod error;
mod registry;
mod storage;

pub use catalog::{EventTypeIndex, TypeCatalog};
pub use error::{Error, Result};
pub use registry::{CallbackId, CallbackRegistry};
pub use storage::CallbackStorage;
