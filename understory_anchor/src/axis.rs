// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis placement: resolve a policy, validate the fit, and fall back.
//!
//! The three steps are independent pure functions over one axis of a
//! [`GeometrySnapshot`](crate::geometry::GeometrySnapshot):
//!
//! 1) [`fits`] checks whether the preferred policy keeps the overlay inside the viewport.
//! 2) [`optimize`] picks the roomier side when it does not.
//! 3) [`resolve`] turns the chosen policy into a coordinate.
//!
//! [`place_axis`] chains them. A fit failure on one axis never affects the other.

use kurbo::{Rect, Size};

use crate::error::PlacementError;
use crate::geometry::{Axis, Viewport};
use crate::policy::{AxisRelation, OffsetPolicy};

/// A resolved coordinate and the relation that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisPosition {
    /// Overlay leading edge along the axis.
    pub coordinate: f64,
    /// Side of the anchor the overlay ended up on.
    pub relation: AxisRelation,
}

/// Result of [`place_axis`]: the position plus how it was reached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisPlacement {
    /// Axis this placement applies to.
    pub axis: Axis,
    /// Final coordinate and relation.
    pub position: AxisPosition,
    /// Policy actually used (the configured one, or the fallback).
    pub policy: OffsetPolicy,
    /// Whether the configured policy was rejected and [`optimize`] ran.
    pub fell_back: bool,
}

/// Coordinate of the overlay's leading edge for `policy`.
///
/// This is only the preferred placement; check it with [`fits`] first.
pub fn resolve(axis: Axis, policy: OffsetPolicy, anchor: Rect, overlay: Size) -> AxisPosition {
    let (start, end) = axis.span(anchor);
    let extent = axis.extent(overlay);
    let coordinate = match policy.relation {
        AxisRelation::Before => start - extent - policy.gap,
        AxisRelation::Center => start - (extent - (end - start)) / 2.0,
        AxisRelation::After => end + policy.gap,
    };
    AxisPosition {
        coordinate,
        relation: policy.relation,
    }
}

/// Whether `policy` keeps the overlay inside the viewport along `axis`.
///
/// - `Before` needs the overlay extent between the viewport edge and the anchor.
/// - `Center` needs half the extent before the anchor start and after the anchor end.
/// - `After` needs the overlay extent between the anchor and the far edge.
pub fn fits(
    axis: Axis,
    policy: OffsetPolicy,
    anchor: Rect,
    overlay: Size,
    viewport: &Viewport,
) -> bool {
    let (start, end) = axis.span(anchor);
    let (near, far) = viewport.span(axis);
    let extent = axis.extent(overlay);
    let leading = start - near;
    match policy.relation {
        AxisRelation::Before => leading >= extent,
        AxisRelation::Center => leading >= extent / 2.0 && end + extent / 2.0 <= far,
        AxisRelation::After => far >= end + extent,
    }
}

/// Revised policy for an axis whose configured `policy` does not fit.
///
/// Picks the side of the anchor with more room (ties go after). The gap keeps
/// its magnitude, or becomes `1` when the configured policy was centered.
///
/// Returns [`PlacementError::Unsolvable`] when the overlay is larger than the
/// room on both sides.
pub fn optimize(
    axis: Axis,
    policy: OffsetPolicy,
    anchor: Rect,
    overlay: Size,
    viewport: &Viewport,
) -> Result<OffsetPolicy, PlacementError> {
    let (start, end) = axis.span(anchor);
    let (near, far) = viewport.span(axis);
    let extent = axis.extent(overlay);
    let before = start - near;
    let after = far - end;
    if extent > before && extent > after {
        tracing::warn!(?axis, extent, before, after, "no side of the anchor fits the overlay");
        return Err(PlacementError::Unsolvable {
            axis,
            overlay_extent: extent,
            before,
            after,
        });
    }
    let side = if before > after {
        AxisRelation::Before
    } else {
        AxisRelation::After
    };
    let revised = policy.toward(side);
    tracing::debug!(?axis, from = ?policy, to = ?revised, "fell back to roomier side");
    Ok(revised)
}

/// Place the overlay along one axis: validate, fall back if needed, resolve.
pub fn place_axis(
    axis: Axis,
    policy: OffsetPolicy,
    anchor: Rect,
    overlay: Size,
    viewport: &Viewport,
) -> Result<AxisPlacement, PlacementError> {
    let (policy, fell_back) = if fits(axis, policy, anchor, overlay, viewport) {
        (policy, false)
    } else {
        (optimize(axis, policy, anchor, overlay, viewport)?, true)
    };
    Ok(AxisPlacement {
        axis,
        position: resolve(axis, policy, anchor, overlay),
        policy,
        fell_back,
    })
}
