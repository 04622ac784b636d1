// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint traversal: the one contract the renderer consumes.

use kurbo::{Rect, Vec2};

use crate::tree::WidgetTree;
use crate::types::{WidgetFlags, WidgetId};

/// Receives one paint call per visible widget, in paint order.
///
/// How the surface behind these calls is produced, resized, or presented is
/// none of this crate's business; a renderer implements `Painter` and owns
/// all of that.
pub trait Painter {
    /// Paint one widget. `bounds` is expressed in the coordinate space of
    /// the root the traversal started from.
    fn paint_widget(&mut self, widget: WidgetId, bounds: Rect);
}

impl WidgetTree {
    /// Walk the tree from `root`, calling the painter once per visible
    /// widget, back to front.
    ///
    /// A container paints before its children, and children paint in
    /// reverse scan order, so the first child (the hit-test winner) is
    /// painted last and ends up topmost. Invisible widgets are skipped
    /// along with their entire subtree; pickability does not affect
    /// painting.
    pub fn paint(&self, root: WidgetId, painter: &mut dyn Painter) {
        self.paint_at(root, Vec2::ZERO, painter);
    }

    fn paint_at(&self, id: WidgetId, offset: Vec2, painter: &mut dyn Painter) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !node.flags.contains(WidgetFlags::VISIBLE) {
            return;
        }
        let world = node.bounds + offset;
        painter.paint_widget(id, world);
        if let Some(state) = &node.container {
            for &child in state.children.iter().rev() {
                self.paint_at(child, world.origin().to_vec2(), painter);
            }
        }
    }
}
