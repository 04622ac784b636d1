// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for widget tree operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by [`WidgetTree`](crate::WidgetTree).
///
/// Routing misses and operations on stale ids are deliberately not errors;
/// they report `false`/`None` per the dispatch contract. Only registration
/// can fail in a way the caller must see.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The widget id is stale or was never inserted into this tree.
    #[error("widget id is stale or belongs to no widget in this tree")]
    StaleWidget,
    /// The underlying callback storage failed to grow a slot.
    #[error(transparent)]
    Callbacks(#[from] overstory_callbacks::Error),
}
