// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer placement: where the arrow sits on the overlay and which way it faces.
//!
//! The pointer is positioned relative to the overlay's top-left corner. On an
//! axis where the overlay sits before or after the anchor, the pointer hangs
//! just outside the overlay edge that faces the anchor, and the overlay itself
//! is nudged away by the pointer's extent so the pointer fits between them. On
//! a centered axis the pointer is centered within the overlay.

use core::fmt;

use kurbo::{Size, Vec2};

use crate::geometry::Axis;
use crate::policy::AxisRelation;

bitflags::bitflags! {
    /// Compass letters describing the side(s) of the overlay the pointer points from.
    ///
    /// At most one vertical (`N`/`S`) and one horizontal (`E`/`W`) letter is set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Facing: u8 {
        /// Vertical relation `Before`.
        const N = 0b0001;
        /// Vertical relation `After`.
        const S = 0b0010;
        /// Horizontal relation `Before`.
        const E = 0b0100;
        /// Horizontal relation `After`.
        const W = 0b1000;
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self::empty()
    }
}

impl Facing {
    /// Letter contributed by one axis' relation.
    pub fn for_relation(axis: Axis, relation: AxisRelation) -> Self {
        match (axis, relation) {
            (_, AxisRelation::Center) => Self::empty(),
            (Axis::Vertical, AxisRelation::Before) => Self::N,
            (Axis::Vertical, AxisRelation::After) => Self::S,
            (Axis::Horizontal, AxisRelation::Before) => Self::E,
            (Axis::Horizontal, AxisRelation::After) => Self::W,
        }
    }

    /// Compass code, vertical letter first: `""`, `"n"`, `"se"`, ...
    pub fn as_str(self) -> &'static str {
        let north = self.contains(Self::N);
        let south = self.contains(Self::S);
        let east = self.contains(Self::E);
        let west = self.contains(Self::W);
        match (north, south, east, west) {
            (true, _, true, _) => "ne",
            (true, _, _, true) => "nw",
            (true, ..) => "n",
            (_, true, true, _) => "se",
            (_, true, _, true) => "sw",
            (_, true, ..) => "s",
            (.., true, _) => "e",
            (.., true) => "w",
            _ => "",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where to draw the pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerResult {
    /// Pointer top-left, relative to the overlay's top-left.
    pub offset: Vec2,
    /// Displacement to add to the overlay origin to make room for the pointer.
    pub nudge: Vec2,
    /// Side(s) the pointer points from.
    pub facing: Facing,
}

/// Offset and nudge along one axis.
///
/// On both axes a `Before` pointer sits flush against the overlay's trailing
/// edge, and an `After` pointer flush against its leading edge.
fn place_on_axis(
    relation: AxisRelation,
    overlay_extent: f64,
    pointer_extent: f64,
    pointer_offset: f64,
) -> (f64, f64) {
    match relation {
        AxisRelation::After => (-(pointer_extent + pointer_offset), pointer_extent),
        AxisRelation::Center => ((overlay_extent - pointer_extent) / 2.0 + pointer_offset, 0.0),
        AxisRelation::Before => (overlay_extent + pointer_offset, -pointer_extent),
    }
}

/// Place the pointer for the given axis relations.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_anchor::policy::AxisRelation;
/// use understory_anchor::pointer::place_pointer;
///
/// // Overlay below the anchor, horizontally centered.
/// let p = place_pointer(
///     AxisRelation::Center,
///     AxisRelation::After,
///     Size::new(100.0, 40.0),
///     Size::new(10.0, 6.0),
///     Vec2::ZERO,
/// );
/// assert_eq!(p.offset, Vec2::new(45.0, -6.0));
/// assert_eq!(p.nudge, Vec2::new(0.0, 6.0));
/// assert_eq!(p.facing.as_str(), "s");
/// ```
pub fn place_pointer(
    relation_x: AxisRelation,
    relation_y: AxisRelation,
    overlay: Size,
    pointer: Size,
    pointer_offset: Vec2,
) -> PointerResult {
    let (x, nudge_x) = place_on_axis(
        relation_x,
        Axis::Horizontal.extent(overlay),
        Axis::Horizontal.extent(pointer),
        pointer_offset.x,
    );
    let (y, nudge_y) = place_on_axis(
        relation_y,
        Axis::Vertical.extent(overlay),
        Axis::Vertical.extent(pointer),
        pointer_offset.y,
    );
    PointerResult {
        offset: Vec2::new(x, y),
        nudge: Vec2::new(nudge_x, nudge_y),
        facing: Facing::for_relation(Axis::Vertical, relation_y)
            | Facing::for_relation(Axis::Horizontal, relation_x),
    }
}
