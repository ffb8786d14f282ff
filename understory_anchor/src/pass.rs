// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full positioning pass over one [`GeometrySnapshot`].
//!
//! ## Anchor mode
//!
//! Each axis is placed independently with [`place_axis`]: the configured policy
//! is validated against the viewport and, when it does not fit, replaced by the
//! roomier side. Any axis that fits on neither side fails the pass with
//! [`PlacementError::Unsolvable`].
//!
//! ## Cursor mode
//!
//! The overlay's top-left is the cursor location plus the raw signed offset.
//! No fit checks run, except that an overlay overflowing the viewport's right
//! edge is mirrored to the left of the cursor.
//!
//! ## Pointer
//!
//! When a pointer is requested and the overlay does not already cover the
//! anchor's center (or the cursor), [`place_pointer`] computes its offset and
//! the overlay origin is nudged to make room for it.

use kurbo::{Point, Rect, Size, Vec2};

use crate::axis::{AxisPlacement, place_axis};
use crate::error::PlacementError;
use crate::geometry::{Axis, GeometrySnapshot};
use crate::overlap::overlaps;
use crate::pointer::{PointerResult, place_pointer};
use crate::policy::{AxisRelation, OffsetPolicy};

/// What the overlay is aligned to for one pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchoring {
    /// Position around the snapshot's anchor rectangle.
    Anchor,
    /// Position at a pointer location in document coordinates.
    Cursor(Point),
}

/// Inputs of a pass that do not come from measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Alignment mode.
    pub anchoring: Anchoring,
    /// Horizontal offset policy.
    pub offset_x: OffsetPolicy,
    /// Vertical offset policy.
    pub offset_y: OffsetPolicy,
    /// Pointer offset when a pointer is attached. The pointer's size comes
    /// from the snapshot.
    pub pointer: Option<Vec2>,
}

impl PlacementRequest {
    /// Anchor-relative request from signed offsets.
    pub fn anchored(offset: Vec2) -> Self {
        Self {
            anchoring: Anchoring::Anchor,
            offset_x: OffsetPolicy::from_signed(offset.x),
            offset_y: OffsetPolicy::from_signed(offset.y),
            pointer: None,
        }
    }

    /// Cursor-relative request from signed offsets.
    pub fn at_cursor(cursor: Point, offset: Vec2) -> Self {
        Self {
            anchoring: Anchoring::Cursor(cursor),
            ..Self::anchored(offset)
        }
    }

    /// The same request with a pointer attached.
    #[must_use]
    pub fn with_pointer(mut self, pointer_offset: Vec2) -> Self {
        self.pointer = Some(pointer_offset);
        self
    }
}

/// Overlay top-left and the relations the pointer needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionResult {
    /// Overlay top-left before any pointer nudge.
    pub origin: Point,
    /// Horizontal relation to the anchor.
    pub relation_x: AxisRelation,
    /// Vertical relation to the anchor.
    pub relation_y: AxisRelation,
}

/// Output of [`position`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Where to put the overlay's top-left, pointer nudge included.
    pub origin: Point,
    /// Overlay size the pass was computed for.
    pub size: Size,
    /// Resolved position before the pointer nudge.
    pub position: PositionResult,
    /// Per-axis details, horizontal then vertical. `None` in cursor mode.
    pub axes: Option<[AxisPlacement; 2]>,
    /// Whether the overlay covers the anchor center (or cursor).
    pub overlaps: bool,
    /// Pointer placement, when requested and not suppressed by overlap.
    pub pointer: Option<PointerResult>,
}

impl Placement {
    /// Final overlay bounds.
    pub fn overlay_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Run one positioning pass.
///
/// ```
/// use kurbo::{Point, Rect, Size, Vec2};
/// use understory_anchor::geometry::{GeometrySnapshot, Viewport};
/// use understory_anchor::pass::{PlacementRequest, position};
/// use understory_anchor::policy::AxisRelation;
///
/// let snap = GeometrySnapshot {
///     anchor: Rect::new(100.0, 100.0, 150.0, 120.0),
///     overlay: Size::new(80.0, 30.0),
///     pointer: Size::ZERO,
///     viewport: Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO),
/// };
/// // Centered horizontally, 4 units above the anchor.
/// let placed = position(&snap, &PlacementRequest::anchored(Vec2::new(0.0, -4.0))).unwrap();
/// assert_eq!(placed.origin, Point::new(85.0, 66.0));
/// assert_eq!(placed.position.relation_y, AxisRelation::Before);
/// ```
pub fn position(
    snapshot: &GeometrySnapshot,
    request: &PlacementRequest,
) -> Result<Placement, PlacementError> {
    let size = snapshot.overlay;
    let (position, axes, guard) = match request.anchoring {
        Anchoring::Anchor => {
            let viewport = &snapshot.viewport;
            let h = place_axis(
                Axis::Horizontal,
                request.offset_x,
                snapshot.anchor,
                size,
                viewport,
            )?;
            let v = place_axis(
                Axis::Vertical,
                request.offset_y,
                snapshot.anchor,
                size,
                viewport,
            )?;
            let position = PositionResult {
                origin: Point::new(h.position.coordinate, v.position.coordinate),
                relation_x: h.position.relation,
                relation_y: v.position.relation,
            };
            (position, Some([h, v]), snapshot.anchor_center())
        }
        Anchoring::Cursor(cursor) => (cursor_position(snapshot, request, cursor), None, cursor),
    };

    let overlapping = overlaps(Rect::from_origin_size(position.origin, size), guard);
    let pointer = match request.pointer {
        Some(pointer_offset) if !overlapping => Some(place_pointer(
            position.relation_x,
            position.relation_y,
            size,
            snapshot.pointer,
            pointer_offset,
        )),
        _ => None,
    };
    let origin = position.origin + pointer.map_or(Vec2::ZERO, |p| p.nudge);
    tracing::debug!(
        x = origin.x,
        y = origin.y,
        overlapping,
        facing = pointer.map_or("", |p| p.facing.as_str()),
        "positioned overlay"
    );
    Ok(Placement {
        origin,
        size,
        position,
        axes,
        overlaps: overlapping,
        pointer,
    })
}

fn cursor_position(
    snapshot: &GeometrySnapshot,
    request: &PlacementRequest,
    cursor: Point,
) -> PositionResult {
    let width = snapshot.overlay.width;
    let (_, right) = snapshot.viewport.span(Axis::Horizontal);
    let mut x = cursor.x + request.offset_x.signed();
    let mut relation_x = request.offset_x.relation;
    if x + width > right {
        x = cursor.x - request.offset_x.gap - width;
        relation_x = AxisRelation::Before;
    }
    PositionResult {
        origin: Point::new(x, cursor.y + request.offset_y.signed()),
        relation_x,
        relation_y: request.offset_y.relation,
    }
}
