// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_anchor::{GeometrySnapshot, PlacementRequest, Viewport, position};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const VIEWPORT: Viewport = Viewport::new(Size::new(1280.0, 800.0), Vec2::ZERO);

/// Anchors scattered over the viewport, so a share of them sit near an edge
/// and exercise the fallback path.
fn gen_snapshots(count: usize, overlay: Size) -> Vec<GeometrySnapshot> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = 20.0 + rng.next_f64() * 100.0;
        let h = 16.0 + rng.next_f64() * 24.0;
        let x0 = rng.next_f64() * (VIEWPORT.size.width - w);
        let y0 = rng.next_f64() * (VIEWPORT.size.height - h);
        out.push(GeometrySnapshot {
            anchor: Rect::from_origin_size((x0, y0), (w, h)),
            overlay,
            pointer: Size::new(10.0, 6.0),
            viewport: VIEWPORT,
        });
    }
    out
}

fn bench_anchor_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor");
    let snaps = gen_snapshots(1024, Size::new(180.0, 60.0));
    group.throughput(Throughput::Elements(snaps.len() as u64));
    for (name, offset) in [
        ("above_centered", Vec2::new(0.0, -4.0)),
        ("right", Vec2::new(6.0, 0.0)),
        ("below_left", Vec2::new(-2.0, 2.0)),
    ] {
        let plain = PlacementRequest::anchored(offset);
        let with_pointer = plain.with_pointer(Vec2::ZERO);
        group.bench_function(format!("{name}_plain"), |b| {
            b.iter(|| {
                let placed = snaps
                    .iter()
                    .filter(|s| position(s, &plain).is_ok())
                    .count();
                black_box(placed);
            });
        });
        group.bench_function(format!("{name}_pointer"), |b| {
            b.iter(|| {
                let mut fell_back = 0_usize;
                for s in &snaps {
                    if let Ok(p) = position(s, &with_pointer) {
                        fell_back += p
                            .axes
                            .map_or(0, |axes| axes.iter().filter(|a| a.fell_back).count());
                    }
                }
                black_box(fell_back);
            });
        });
    }
    group.finish();
}

fn bench_cursor_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor");
    let snaps = gen_snapshots(1024, Size::new(180.0, 60.0));
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let requests: Vec<_> = snaps
        .iter()
        .map(|_| {
            let cursor = (
                rng.next_f64() * VIEWPORT.size.width,
                rng.next_f64() * VIEWPORT.size.height,
            );
            PlacementRequest::at_cursor(cursor.into(), Vec2::new(12.0, 16.0))
                .with_pointer(Vec2::ZERO)
        })
        .collect();
    group.throughput(Throughput::Elements(snaps.len() as u64));
    group.bench_function("scattered", |b| {
        b.iter(|| {
            for (s, r) in snaps.iter().zip(&requests) {
                black_box(position(s, r).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_anchor_mode, bench_cursor_mode);
criterion_main!(benches);
