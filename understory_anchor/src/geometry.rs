// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry snapshot: anchor, overlay, pointer, and viewport measurements for one pass.
//!
//! All coordinates live in a single document-relative frame. The viewport is the
//! visible region of that frame, so its origin is the current scroll offset.

use kurbo::{Point, Rect, Size, Vec2};

/// One of the two placement axes.
///
/// Every per-axis algorithm in this crate is written once and projected through
/// these helpers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left to right (`x`).
    Horizontal,
    /// Top to bottom (`y`).
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Leading and trailing edges of `rect` along this axis.
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Component of a point along this axis.
    pub fn coord(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.x,
            Self::Vertical => pt.y,
        }
    }

    /// Component of a vector along this axis.
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// The visible, scrollable region in document coordinates at snapshot time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Visible size (window inner width and height).
    pub size: Size,
    /// Scroll offset of the document (`scrollLeft`, `scrollTop`).
    pub scroll: Vec2,
}

impl Viewport {
    /// Create a viewport from its visible size and scroll offset.
    pub const fn new(size: Size, scroll: Vec2) -> Self {
        Self { size, scroll }
    }

    /// The visible region as a document-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll.to_point(), self.size)
    }

    /// Near and far edges of the visible region along `axis`.
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        axis.span(self.rect())
    }
}

/// Source of live measurements for one anchored overlay.
///
/// A presentation layer implements this on top of whatever it renders with
/// (DOM measurement, a box tree, a terminal grid). The engine only reads from
/// it through [`GeometrySnapshot::capture`].
pub trait AnchorGeometryProvider {
    /// Document-relative bounds of the anchor.
    fn anchor_rect(&self) -> Rect;
    /// Outer size of the overlay, as rendered with its current content.
    fn overlay_size(&self) -> Size;
    /// Outer size of the pointer, or zero when there is none.
    fn pointer_size(&self) -> Size {
        Size::ZERO
    }
    /// Current viewport.
    fn viewport(&self) -> Viewport;
}

/// Immutable measurements for a single positioning pass.
///
/// Take a fresh snapshot for every pass; a snapshot describes exactly one
/// anchor at one moment of layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometrySnapshot {
    /// Anchor bounds.
    pub anchor: Rect,
    /// Overlay size. Its position is what the pass computes.
    pub overlay: Size,
    /// Pointer size.
    pub pointer: Size,
    /// Viewport at snapshot time.
    pub viewport: Viewport,
}

impl GeometrySnapshot {
    /// Read all measurements from `provider` at once.
    pub fn capture<P: AnchorGeometryProvider + ?Sized>(provider: &P) -> Self {
        Self {
            anchor: provider.anchor_rect(),
            overlay: provider.overlay_size(),
            pointer: provider.pointer_size(),
            viewport: provider.viewport(),
        }
    }

    /// Center of the anchor, the point the overlap test guards.
    pub fn anchor_center(&self) -> Point {
        self.anchor.center()
    }
}

impl AnchorGeometryProvider for GeometrySnapshot {
    fn anchor_rect(&self) -> Rect {
        self.anchor
    }

    fn overlay_size(&self) -> Size {
        self.overlay
    }

    fn pointer_size(&self) -> Size {
        self.pointer
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Document-relative bounds of an element from its offset-parent chain.
///
/// `offsets` are the element's offsets relative to each successive offset
/// parent (innermost first). `scroll` is the scroll offset of the containing
/// scroll container, if any, and is subtracted once.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_anchor::geometry::document_rect;
///
/// let r = document_rect(
///     [Vec2::new(5.0, 5.0), Vec2::new(100.0, 40.0)],
///     Vec2::new(0.0, 20.0),
///     Size::new(50.0, 20.0),
/// );
/// assert_eq!(r, Rect::new(105.0, 25.0, 155.0, 45.0));
/// ```
pub fn document_rect(
    offsets: impl IntoIterator<Item = Vec2>,
    scroll: Vec2,
    size: Size,
) -> Rect {
    let origin = offsets
        .into_iter()
        .fold(Point::ORIGIN, |acc, off| acc + off)
        - scroll;
    Rect::from_origin_size(origin, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_projections() {
        let r = Rect::new(1.0, 2.0, 11.0, 22.0);
        assert_eq!(Axis::Horizontal.span(r), (1.0, 11.0));
        assert_eq!(Axis::Vertical.span(r), (2.0, 22.0));
        let s = Size::new(3.0, 4.0);
        assert_eq!(Axis::Horizontal.extent(s), 3.0);
        assert_eq!(Axis::Vertical.extent(s), 4.0);
        let p = Point::new(5.0, 6.0);
        assert_eq!(Axis::Horizontal.coord(p), 5.0);
        assert_eq!(Axis::Vertical.coord(p), 6.0);
    }

    #[test]
    fn viewport_includes_scroll() {
        let vp = Viewport::new(Size::new(300.0, 600.0), Vec2::new(40.0, 100.0));
        assert_eq!(vp.rect(), Rect::new(40.0, 100.0, 340.0, 700.0));
        assert_eq!(vp.span(Axis::Horizontal), (40.0, 340.0));
        assert_eq!(vp.span(Axis::Vertical), (100.0, 700.0));
    }

    struct Fixed;
    impl AnchorGeometryProvider for Fixed {
        fn anchor_rect(&self) -> Rect {
            Rect::new(10.0, 10.0, 60.0, 30.0)
        }
        fn overlay_size(&self) -> Size {
            Size::new(200.0, 80.0)
        }
        fn viewport(&self) -> Viewport {
            Viewport::new(Size::new(300.0, 600.0), Vec2::ZERO)
        }
    }

    #[test]
    fn capture_reads_provider_and_defaults_pointer() {
        let snap = GeometrySnapshot::capture(&Fixed);
        assert_eq!(snap.anchor, Rect::new(10.0, 10.0, 60.0, 30.0));
        assert_eq!(snap.overlay, Size::new(200.0, 80.0));
        assert_eq!(snap.pointer, Size::ZERO);
        assert_eq!(snap.anchor_center(), Point::new(35.0, 20.0));
        // A snapshot is itself a provider; capturing it again is lossless.
        assert_eq!(GeometrySnapshot::capture(&snap), snap);
    }

    #[test]
    fn document_rect_without_parents_is_scroll_relative() {
        let r = document_rect(core::iter::empty(), Vec2::new(10.0, 0.0), Size::new(4.0, 4.0));
        assert_eq!(r, Rect::new(-10.0, 0.0, -6.0, 4.0));
    }
}
