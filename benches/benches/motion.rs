// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corral_motion::{Animation, Easing, Sequence, Spring, Spring2, SpringConfig, Step};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

const FRAME: f64 = 1.0 / 60.0;

fn presets() -> [(&'static str, SpringConfig); 3] {
    [
        ("critical", SpringConfig::default()),
        ("origami(40,7)", SpringConfig::from_tension_friction(40.0, 7.0)),
        ("overdamped", {
            let mut c = SpringConfig::default();
            c.damping *= 3.0;
            c
        }),
    ]
}

fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("corral_motion/spring");

    for (name, config) in presets() {
        group.bench_function(format!("settle_1d({name})"), |b| {
            b.iter_batched(
                || Spring::new(0.0, 500.0, config),
                |mut spring| {
                    let mut frames = 0_u32;
                    while !spring.tick(FRAME).is_finished() {
                        frames += 1;
                    }
                    black_box((frames, spring.value()));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("value_at({name})"), |b| {
            let spring = Spring::new(0.0, 500.0, config);
            b.iter(|| black_box(spring.value_at(black_box(0.137))));
        });
    }

    group.bench_function("settle_2d(critical)", |b| {
        b.iter_batched(
            || {
                Spring2::new(
                    Point::new(-180.0, 420.0),
                    Point::new(0.0, 150.0),
                    SpringConfig::default(),
                )
            },
            |mut spring| {
                while !spring.tick(FRAME).is_finished() {}
                black_box(spring.value());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("corral_motion/easing");

    for (name, easing) in [
        ("linear", Easing::Linear),
        ("ease_in_out", Easing::EaseInOut),
        ("cubic_bezier", Easing::CubicBezier(0.68, -0.55, 0.27, 1.55)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..=100 {
                    sum += easing.apply(black_box(f64::from(i) / 100.0));
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    c.bench_function("corral_motion/sequence/banner", |b| {
        b.iter_batched(
            || {
                Sequence::new(
                    -100.0,
                    [
                        Step::timing(0.0, 0.3),
                        Step::delay(2.5),
                        Step::timing(-100.0, 0.3),
                        Step::spring(0.0, SpringConfig::default()),
                    ],
                )
            },
            |mut seq| {
                while !seq.tick(FRAME).is_finished() {}
                black_box(seq.value());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_spring, bench_easing, bench_sequence);
criterion_main!(benches);
