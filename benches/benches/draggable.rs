// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corral_drag::{
    ArenaBounds, Draggable, DraggableConfig, GestureEvent, Phase, PointerTracker, clamp,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};

const FRAME: f64 = 1.0 / 60.0;

fn draggable() -> Draggable {
    Draggable::new(DraggableConfig::default()).expect("default configuration is valid")
}

fn bench_clamp(c: &mut Criterion) {
    let bounds =
        ArenaBounds::new(Point::ORIGIN, Point::new(220.0, 150.0)).expect("ordered bounds");
    let points: Vec<Point> = (0..256)
        .map(|i| {
            let t = f64::from(i);
            Point::new(t * 7.3 - 600.0, t * -4.1 + 500.0)
        })
        .collect();

    c.bench_function("corral_drag/clamp_256", |b| {
        b.iter(|| {
            let mut acc = Point::ORIGIN;
            for &p in &points {
                let q = clamp(black_box(p), &bounds);
                acc.x += q.x;
                acc.y += q.y;
            }
            black_box(acc)
        });
    });
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("corral_drag/gesture");

    for &moves in &[16_u32, 256_u32] {
        group.bench_function(format!("drag_release_inside(moves={moves})"), |b| {
            b.iter_batched(
                draggable,
                |mut item| {
                    item.handle(GestureEvent::Start);
                    for i in 1..=moves {
                        let t = f64::from(i) / f64::from(moves);
                        item.handle(GestureEvent::Move(Vec2::new(100.0 * t, 50.0 * t)));
                    }
                    black_box(item.handle(GestureEvent::End));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pointer_adapter(moves={moves})"), |b| {
            b.iter_batched(
                || (draggable(), PointerTracker::default()),
                |(mut item, mut pointer)| {
                    item.handle(pointer.down(Point::new(90.0, 90.0)));
                    for i in 1..=moves {
                        let x = 90.0 + f64::from(i);
                        if let Some(event) = pointer.moved(Point::new(x, 90.0)) {
                            item.handle(event);
                        }
                    }
                    if let Some(event) = pointer.up() {
                        item.handle(event);
                    }
                    black_box(item.position());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_snap_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("corral_drag/snap_back");

    for &(name, delta) in &[
        ("right_edge", Vec2::new(200.0, 50.0)),
        ("far_corner", Vec2::new(-2000.0, 2000.0)),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut item = draggable();
                    item.handle(GestureEvent::Start);
                    item.handle(GestureEvent::Move(delta));
                    item.handle(GestureEvent::End);
                    item
                },
                |mut item| {
                    while item.phase() == Phase::SnappingBack {
                        item.tick(FRAME);
                    }
                    black_box(item.position());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clamp, bench_gesture, bench_snap_back);
criterion_main!(benches);
