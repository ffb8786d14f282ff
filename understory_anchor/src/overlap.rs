// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap test between a positioned overlay and the anchor's center.

use kurbo::{Point, Rect};

/// Whether `overlay` covers `point`, inclusive on every edge.
///
/// Note that [`Rect::contains`] excludes the far edges; this does not.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_anchor::overlap::overlaps;
///
/// let overlay = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(overlaps(overlay, Point::new(10.0, 10.0)));
/// assert!(!overlaps(overlay, Point::new(10.5, 5.0)));
/// ```
pub fn overlaps(overlay: Rect, point: Point) -> bool {
    overlay.x0 <= point.x && point.x <= overlay.x1 && overlay.y0 <= point.y && point.y <= overlay.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_touching_the_point_overlap() {
        let center = Point::new(35.0, 20.0);
        // Each edge of the overlay in turn sits exactly on the point.
        let touching = [
            Rect::new(35.0, 0.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 35.0, 40.0),
            Rect::new(0.0, 20.0, 100.0, 60.0),
            Rect::new(0.0, -20.0, 100.0, 20.0),
            Rect::new(35.0, 20.0, 35.0, 20.0),
        ];
        for r in touching {
            assert!(overlaps(r, center), "{r:?} should cover {center:?}");
        }
    }

    #[test]
    fn just_outside_does_not_overlap() {
        let center = Point::new(35.0, 20.0);
        let outside = [
            Rect::new(35.01, 0.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 34.99, 40.0),
            Rect::new(0.0, 20.01, 100.0, 60.0),
            Rect::new(0.0, -20.0, 100.0, 19.99),
        ];
        for r in outside {
            assert!(!overlaps(r, center), "{r:?} should not cover {center:?}");
        }
    }
}
