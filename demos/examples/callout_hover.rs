// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callout hover.
//!
//! Drive a callout's show/hide state machine with a virtual clock: a hover too
//! short to show, a delayed show, holding the callout open from its overlay,
//! re-entering during a pending hide, and a cursor-aligned callout.
//!
//! Run:
//! - `cargo run -p understory_demos --example callout_hover`

use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use understory_anchor::{GeometrySnapshot, Viewport};
use understory_callout::{
    Alignment, Callout, CalloutConfig, CalloutEvent, Content, LeaveTarget, ManualScheduler, Phase,
    TaskId,
};

fn tick(
    timers: &mut ManualScheduler,
    callout: &mut Callout<TaskId>,
    geometry: &GeometrySnapshot,
    ms: u64,
) -> Vec<CalloutEvent> {
    let mut events = Vec::new();
    for (handle, task) in timers.advance(Duration::from_millis(ms)) {
        match callout.fire(handle, geometry) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => println!("  {task:?} task {handle:?} was stale"),
            Err(err) => println!("  {task:?} failed: {err}"),
        }
    }
    events
}

fn main() {
    let geometry = GeometrySnapshot {
        anchor: Rect::new(200.0, 200.0, 260.0, 220.0),
        overlay: Size::new(120.0, 32.0),
        pointer: Size::new(10.0, 6.0),
        viewport: Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO),
    };
    let mut timers = ManualScheduler::new();
    let mut callout = Callout::new(
        CalloutConfig {
            pointer: true,
            offset: Vec2::new(0.0, -6.0),
            show_delay_ms: 200,
            hide_delay_ms: 150,
            ..Default::default()
        },
        "Save document",
    )
    .unwrap();
    let cursor = Point::new(210.0, 210.0);

    // A quick pass over the anchor never shows.
    callout.anchor_enter(&mut timers, &geometry, cursor).unwrap();
    assert!(tick(&mut timers, &mut callout, &geometry, 100).is_empty());
    assert_eq!(callout.anchor_leave(&mut timers, LeaveTarget::Elsewhere), None);
    println!("flicker: phase={:?} pending={}", callout.phase(), timers.pending_len());
    assert_eq!(callout.phase(), Phase::Hidden);
    assert_eq!(timers.pending_len(), 0);

    // Dwell long enough and it shows.
    callout.anchor_enter(&mut timers, &geometry, cursor).unwrap();
    let events = tick(&mut timers, &mut callout, &geometry, 200);
    println!("dwell: {events:?}");
    assert!(matches!(events.as_slice(), [CalloutEvent::Show(_)]));
    println!("content: {:?}", callout.content());

    // Moving onto the overlay keeps it open; leaving the overlay starts the hide delay.
    assert_eq!(callout.anchor_leave(&mut timers, LeaveTarget::Overlay), None);
    callout.overlay_enter(&mut timers);
    assert_eq!(callout.phase(), Phase::Shown);
    callout.overlay_leave(&mut timers, LeaveTarget::Elsewhere);
    assert_eq!(callout.phase(), Phase::PendingHide);

    // Coming back before the hide elapses cancels it and repositions.
    assert!(tick(&mut timers, &mut callout, &geometry, 100).is_empty());
    let event = callout.anchor_enter(&mut timers, &geometry, cursor).unwrap();
    println!("re-enter: {event:?}");
    assert!(matches!(event, Some(CalloutEvent::Reposition(_))));
    assert_eq!(callout.phase(), Phase::Shown);

    // Finally leave for good.
    callout.anchor_leave(&mut timers, LeaveTarget::Elsewhere);
    let events = tick(&mut timers, &mut callout, &geometry, 150);
    println!("leave: {events:?}");
    assert_eq!(events, vec![CalloutEvent::Hide]);

    // A cursor-aligned callout with deferred content and no delay.
    let mut follow: Callout<TaskId> = Callout::new(
        CalloutConfig {
            alignment: "cursor".parse::<Alignment>().unwrap(),
            offset: Vec2::new(12.0, 16.0),
            show_delay_ms: 0,
            content: Content::deferred(|| "Resolved on first show".into()),
            ..Default::default()
        },
        "unused",
    )
    .unwrap();
    let event = follow
        .anchor_enter(&mut timers, &geometry, Point::new(240.0, 205.0))
        .unwrap();
    if let Some(CalloutEvent::Show(p)) = event {
        println!("cursor: origin={:?} content={:?}", p.origin, follow.content());
        assert_eq!(p.origin, Point::new(252.0, 221.0));
    } else {
        panic!("expected an immediate show, got {event:?}");
    }
}
