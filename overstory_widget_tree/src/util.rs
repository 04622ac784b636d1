// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers.

use kurbo::{Point, Rect};

/// Closed-box containment: edges count as inside.
///
/// `kurbo::Rect::contains` is half-open; hit testing here deliberately
/// includes the maximum edges, matching the containment semantics the
/// dispatch contract specifies.
pub(crate) fn contains_inclusive(rect: Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}
