// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `corral_motion` crate.
//!
//! These drive whole animations at display-refresh granularity the way a host
//! would, checking timing of phase boundaries rather than individual curves.

use corral_motion::{
    Animation, Easing, Extrapolate, Interpolation, Sequence, Spring, SpringConfig, Status, Step,
};

const FRAME: f64 = 1.0 / 60.0;

fn frames_until_finished(anim: &mut impl Animation, limit: usize) -> usize {
    (1..=limit)
        .find(|_| anim.tick(FRAME).is_finished())
        .unwrap_or_else(|| panic!("animation still running after {limit} frames"))
}

#[test]
fn notification_banner_holds_then_leaves() {
    let mut banner = Sequence::new(
        -100.0,
        [
            Step::timing(20.0, 0.3),
            Step::delay(2.5),
            Step::timing(-100.0, 0.3),
        ],
    );

    // Slide-in: roughly 18 frames.
    for _ in 0..18 {
        banner.tick(FRAME);
    }
    assert!((banner.value() - 20.0).abs() < 0.5);

    // Hold: the banner sits still for the whole delay.
    for _ in 0..120 {
        banner.tick(FRAME);
        assert!((banner.value() - 20.0).abs() < 1e-9);
    }

    let total = 138 + frames_until_finished(&mut banner, 1_000);
    // 3.1 seconds at 60Hz, give or take a frame of float accumulation.
    assert!((185..=188).contains(&total), "finished after {total} frames");
    assert_eq!(banner.value(), -100.0);
}

#[test]
fn pulse_peaks_midway() {
    let mut pulse = Sequence::new(
        0.0,
        [
            Step::Timing {
                to: 1.0,
                duration: 0.5,
                easing: Easing::EaseInOut,
            },
            Step::Timing {
                to: 0.0,
                duration: 0.5,
                easing: Easing::EaseInOut,
            },
        ],
    );
    let mut peak = 0.0_f64;
    while pulse.tick(FRAME) == Status::Running {
        peak = peak.max(pulse.value());
        assert!((0.0..=1.0).contains(&pulse.value()));
    }
    assert!(peak > 0.99);
    assert_eq!(pulse.value(), 0.0);
}

#[test]
fn expanding_button_spring_toggles_both_ways() {
    let config = SpringConfig::from_tension_friction(100.0, 8.0);
    assert_eq!(config.validate(), Ok(()));

    let mut open = Spring::new(0.0, 1.0, config);
    frames_until_finished(&mut open, 600);
    assert_eq!(open.value(), 1.0);

    let mut close = Spring::new(open.value(), 0.0, config);
    frames_until_finished(&mut close, 600);
    assert_eq!(close.value(), 0.0);
}

#[test]
fn pulse_drives_scale_and_opacity() {
    let scale = Interpolation::new([0.0, 1.0], [1.0, 1.2]).unwrap();
    let opacity = Interpolation::new([0.0, 1.0], [1.0, 0.7]).unwrap();
    let mut pulse = Sequence::new(0.0, [Step::timing(1.0, 0.5), Step::timing(0.0, 0.5)]);

    assert_eq!(scale.map(pulse.value()), 1.0);
    assert_eq!(opacity.map(pulse.value()), 1.0);

    pulse.tick(0.5);
    assert_eq!(scale.map(pulse.value()), 1.2);
    assert_eq!(opacity.map(pulse.value()), 0.7);

    while pulse.tick(FRAME) == Status::Running {
        let s = scale.map(pulse.value());
        let o = opacity.map(pulse.value());
        assert!((1.0..=1.2).contains(&s), "scale {s}");
        assert!((0.7..=1.0).contains(&o), "opacity {o}");
    }
    assert_eq!(scale.map(pulse.value()), 1.0);
    assert_eq!(opacity.map(pulse.value()), 1.0);
}

#[test]
fn fab_sub_buttons_fan_out_with_overshoot() {
    let config = SpringConfig::from_tension_friction(100.0, 8.0);
    let lifts: Vec<Interpolation> = (0..3)
        .map(|i| Interpolation::new([0.0, 1.0], [0.0, -60.0 * f64::from(i + 1)]).unwrap())
        .collect();
    let clamped = lifts[2].clone().with_extrapolate(Extrapolate::Clamp);

    let mut open = Spring::new(0.0, 1.0, config);
    let mut highest = 0.0_f64;
    while !open.tick(FRAME).is_finished() {
        highest = highest.min(lifts[2].map(open.value()));
        assert!(clamped.map(open.value()) >= -180.0);
    }
    // The bouncy preset carries the top button past its slot before settling.
    assert!(highest < -180.0, "top button peaked at {highest}");
    for (i, lift) in lifts.iter().enumerate() {
        assert_eq!(lift.map(open.value()), -60.0 * (i as f64 + 1.0));
    }

    let scale = Interpolation::new([0.0, 1.0], [0.0, 1.0]).unwrap();
    assert_eq!(scale.map(open.value()), 1.0);
}
