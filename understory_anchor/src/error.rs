// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement errors.

use crate::geometry::Axis;

/// Failure of a positioning pass.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlacementError {
    /// The overlay is larger than the room on both sides of the anchor along
    /// `axis`. No placement keeps it inside the viewport.
    ///
    /// The caller decides what to do instead: clip, scroll, or skip showing.
    #[error(
        "overlay extent {overlay_extent} exceeds the room on both sides of the anchor along {axis:?} (before: {before}, after: {after})"
    )]
    Unsolvable {
        /// Axis with no fitting side.
        axis: Axis,
        /// Overlay size along `axis`.
        overlay_extent: f64,
        /// Room between the viewport's near edge and the anchor.
        before: f64,
        /// Room between the anchor and the viewport's far edge.
        after: f64,
    },
}
