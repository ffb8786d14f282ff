// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor basics.
//!
//! Place an overlay above an anchor, watch it fall back near the viewport edge,
//! attach a pointer, and see what happens when nothing fits.
//!
//! Run:
//! - `cargo run -p understory_demos --example anchor_basics`

use kurbo::{Point, Rect, Size, Vec2};
use understory_anchor::{
    AxisRelation, GeometrySnapshot, PlacementError, PlacementRequest, Viewport, position,
};

fn main() {
    let viewport = Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO);
    let mut snap = GeometrySnapshot {
        anchor: Rect::new(100.0, 100.0, 150.0, 120.0),
        overlay: Size::new(80.0, 30.0),
        pointer: Size::new(10.0, 6.0),
        viewport,
    };

    // Centered, 4 units above.
    let above = PlacementRequest::anchored(Vec2::new(0.0, -4.0));
    let placed = position(&snap, &above).unwrap();
    println!("above: origin={:?}", placed.origin);
    assert_eq!(placed.origin, Point::new(85.0, 66.0));

    // Same request with the anchor near the top edge: the vertical axis flips below.
    snap.anchor = Rect::new(100.0, 10.0, 150.0, 30.0);
    let placed = position(&snap, &above).unwrap();
    let [h, v] = placed.axes.unwrap();
    println!(
        "near top: origin={:?} h.fell_back={} v.fell_back={} relation_y={:?}",
        placed.origin, h.fell_back, v.fell_back, placed.position.relation_y
    );
    assert!(v.fell_back && !h.fell_back);
    assert_eq!(placed.position.relation_y, AxisRelation::After);
    assert_eq!(placed.origin.y, 34.0);

    // With a pointer, the overlay is nudged by the pointer's extent.
    snap.anchor = Rect::new(100.0, 100.0, 150.0, 120.0);
    let placed = position(&snap, &above.with_pointer(Vec2::ZERO)).unwrap();
    let pointer = placed.pointer.unwrap();
    println!(
        "pointer: origin={:?} pointer.offset={:?} facing={}",
        placed.origin, pointer.offset, pointer.facing
    );
    assert_eq!(placed.origin, Point::new(85.0, 60.0));

    // Scrolling moves the viewport in document space; anchors keep their document rects.
    snap.viewport.scroll = Vec2::new(0.0, 90.0);
    let placed = position(&snap, &above).unwrap();
    println!("scrolled: origin={:?}", placed.origin);
    assert_eq!(placed.position.relation_y, AxisRelation::After);

    // An overlay taller than the room on either side cannot be placed.
    let cramped = GeometrySnapshot {
        anchor: Rect::new(100.0, 40.0, 200.0, 60.0),
        overlay: Size::new(100.0, 50.0),
        pointer: Size::ZERO,
        viewport: Viewport::new(Size::new(300.0, 100.0), Vec2::ZERO),
    };
    match position(&cramped, &above) {
        Err(err @ PlacementError::Unsolvable { .. }) => println!("cramped: {err}"),
        Ok(p) => panic!("unexpected placement {p:?}"),
    }
}
