// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_anchor::{GeometrySnapshot, Viewport};
use understory_callout::{Callout, CalloutConfig, LeaveTarget, ManualScheduler, TaskId};

fn geometry() -> GeometrySnapshot {
    GeometrySnapshot {
        anchor: Rect::new(400.0, 300.0, 480.0, 324.0),
        overlay: Size::new(160.0, 48.0),
        pointer: Size::new(10.0, 6.0),
        viewport: Viewport::new(Size::new(1024.0, 768.0), Vec2::ZERO),
    }
}

fn callout(config: CalloutConfig) -> Callout<TaskId> {
    Callout::new(config, "Bench").expect("valid config")
}

fn bench_hover_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_cycle");
    let geom = geometry();
    let cursor = Point::new(410.0, 310.0);

    let immediate = CalloutConfig {
        show_delay_ms: 0,
        pointer: true,
        ..Default::default()
    };
    group.bench_function("immediate", |b| {
        let mut timers = ManualScheduler::new();
        let mut c = callout(immediate.clone());
        b.iter(|| {
            black_box(c.anchor_enter(&mut timers, &geom, cursor).ok());
            black_box(c.anchor_leave(&mut timers, LeaveTarget::Elsewhere));
        });
    });

    let delayed = CalloutConfig {
        show_delay_ms: 200,
        hide_delay_ms: 100,
        pointer: true,
        ..Default::default()
    };
    group.bench_function("delayed", |b| {
        let mut timers = ManualScheduler::new();
        let mut c = callout(delayed.clone());
        b.iter(|| {
            let _ = c.anchor_enter(&mut timers, &geom, cursor);
            for (handle, _) in timers.advance(Duration::from_millis(200)) {
                black_box(c.fire(handle, &geom).ok());
            }
            c.anchor_leave(&mut timers, LeaveTarget::Elsewhere);
            for (handle, _) in timers.advance(Duration::from_millis(100)) {
                black_box(c.fire(handle, &geom).ok());
            }
        });
    });

    // Quick in-and-out hovers never show; they only schedule and cancel.
    group.bench_function("flicker", |b| {
        let mut timers = ManualScheduler::new();
        let mut c = callout(delayed.clone());
        b.iter(|| {
            let _ = c.anchor_enter(&mut timers, &geom, cursor);
            black_box(c.anchor_leave(&mut timers, LeaveTarget::Elsewhere));
        });
    });
    group.finish();
}

fn bench_reposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("reposition");
    let geom = geometry();
    let config = CalloutConfig {
        show_delay_ms: 0,
        pointer: true,
        ..Default::default()
    };
    group.bench_function("scroll_steps", |b| {
        b.iter_batched(
            || {
                let mut timers = ManualScheduler::new();
                let mut c = callout(config.clone());
                let _ = c.anchor_enter(&mut timers, &geom, Point::new(410.0, 310.0));
                (timers, c)
            },
            |(mut timers, mut c)| {
                let mut g = geom;
                for step in 0..64 {
                    g.viewport.scroll = Vec2::new(0.0, f64::from(step) * 4.0);
                    black_box(c.reposition(&mut timers, &g).ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_hover_cycle, bench_reposition);
criterion_main!(benches);
