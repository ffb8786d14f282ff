// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor --heading-base-level=0

//! Understory Anchor: Kurbo-native placement of floating overlays.
//!
//! Understory Anchor positions a floating overlay (tooltip, popover, callout) next to an
//! anchor rectangle or at a cursor location, keeps it inside the viewport, and optionally
//! attaches a pointer that connects the overlay to its anchor.
//!
//! It does not measure, render, or animate anything.
//! Feed it a [`GeometrySnapshot`] and a [`PlacementRequest`], and it returns a [`Placement`].
//!
//! ## Offset policies
//!
//! Each axis is configured with one signed number.
//! Negative places the overlay before the anchor (left or above) with a gap of `|value|`,
//! zero centers it over the anchor, and positive places it after (right or below).
//! [`OffsetPolicy::from_signed`] decodes this once into an [`AxisRelation`] and a gap.
//!
//! ## Pipeline
//!
//! 1) Snapshot: [`GeometrySnapshot::capture`] reads anchor, overlay, pointer, and viewport
//!    measurements from an [`AnchorGeometryProvider`].
//! 2) Fit: [`fits`](axis::fits) checks each axis' configured policy against the viewport.
//! 3) Fallback: [`optimize`](axis::optimize) moves a rejected axis to the side of the anchor
//!    with more room, or fails with [`PlacementError::Unsolvable`] when neither side has enough.
//! 4) Resolve: [`resolve`](axis::resolve) turns the policy into a coordinate.
//! 5) Overlap: [`overlaps`](overlap::overlaps) tests whether the overlay covers the anchor center.
//! 6) Pointer: [`place_pointer`](pointer::place_pointer) places the pointer and nudges the overlay,
//!    unless the overlay already covers the anchor.
//!
//! [`position`] runs all of it.
//!
//! ## Coordinate frame
//!
//! Everything is document-relative. The [`Viewport`] is the visible part of the document,
//! so its origin is the scroll offset. Layout inside nested scroll containers is not modeled.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_anchor::{GeometrySnapshot, PlacementRequest, Viewport, position};
//!
//! let snap = GeometrySnapshot {
//!     anchor: Rect::new(10.0, 10.0, 60.0, 30.0),
//!     overlay: Size::new(200.0, 80.0),
//!     pointer: Size::new(10.0, 5.0),
//!     viewport: Viewport::new(Size::new(300.0, 600.0), Vec2::ZERO),
//! };
//!
//! // Below the anchor with a 1 unit gap, horizontally centered.
//! let placed = position(&snap, &PlacementRequest::anchored(Vec2::new(0.0, 1.0))).unwrap();
//!
//! // Centering would start at x = -65, so the overlay moved right of the anchor instead.
//! assert_eq!(placed.position.origin, Point::new(61.0, 31.0));
//! ```
//!
//! ### Pointer
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use understory_anchor::{GeometrySnapshot, PlacementRequest, Viewport, position};
//!
//! let snap = GeometrySnapshot {
//!     anchor: Rect::new(100.0, 300.0, 150.0, 320.0),
//!     overlay: Size::new(60.0, 40.0),
//!     pointer: Size::new(10.0, 5.0),
//!     viewport: Viewport::new(Size::new(300.0, 600.0), Vec2::ZERO),
//! };
//! let req = PlacementRequest::anchored(Vec2::new(0.0, -2.0)).with_pointer(Vec2::ZERO);
//! let placed = position(&snap, &req).unwrap();
//! let pointer = placed.pointer.unwrap();
//! assert_eq!(pointer.facing.as_str(), "n");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod axis;
pub mod error;
pub mod geometry;
pub mod overlap;
pub mod pass;
pub mod pointer;
pub mod policy;

pub use axis::{AxisPlacement, AxisPosition};
pub use error::PlacementError;
pub use geometry::{AnchorGeometryProvider, Axis, GeometrySnapshot, Viewport};
pub use pass::{Anchoring, Placement, PlacementRequest, PositionResult, position};
pub use pointer::{Facing, PointerResult};
pub use policy::{AxisRelation, OffsetPolicy};
