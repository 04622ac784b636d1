// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for callback storage operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by [`CallbackStorage`](crate::CallbackStorage).
///
/// Routing-style misses (absent ids, never-created slots) are silent no-ops
/// by contract and do not appear here; the only failure worth reporting is
/// one that would otherwise silently disable an entire callback category.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Growing the slot table to cover a newly observed event type failed.
    #[error("failed to allocate callback slot for event type index {index}")]
    SlotAllocation {
        /// The per-type index the slot table could not grow to cover.
        index: usize,
    },
}
