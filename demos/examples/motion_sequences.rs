// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orchestrated animations.
//!
//! Samples a few `corral_motion` animations at 60 Hz and prints them as
//! text plots: a notification banner that drops in, holds and retracts; a
//! pulsing dot; and a button that springs open with a bouncy preset.
//!
//! Run:
//! - `cargo run -p corral_demos --example motion_sequences`

use corral_demos::{FRAME, init_logging};
use corral_motion::{Animation, Easing, Sequence, Spring, SpringConfig, Step};

fn plot(label: &str, value: f64, lo: f64, hi: f64) {
    const WIDTH: f64 = 50.0;
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    let column = (t * WIDTH).round() as usize;
    println!("{label:>6} {value:>8.2} |{}*", " ".repeat(column));
}

fn run<A: Animation<Value = f64>>(name: &str, anim: &mut A, lo: f64, hi: f64, every: usize) {
    println!("{name}");
    let mut frame = 0_usize;
    plot("0", anim.value(), lo, hi);
    while !anim.tick(FRAME).is_finished() {
        frame += 1;
        if frame % every == 0 {
            plot(&frame.to_string(), anim.value(), lo, hi);
        }
        if frame > 1200 {
            log::warn!("{name} still running after {frame} frames");
            break;
        }
    }
    plot("end", anim.value(), lo, hi);
    println!("{name}: {} frames\n", frame + 1);
}

fn main() {
    init_logging();

    // Drop in from -100, stay for 2.5 s, slide back out.
    let mut banner = Sequence::new(
        -100.0,
        [
            Step::Timing {
                to: 0.0,
                duration: 0.3,
                easing: Easing::EaseOut,
            },
            Step::delay(2.5),
            Step::Timing {
                to: -100.0,
                duration: 0.3,
                easing: Easing::EaseIn,
            },
        ],
    );
    run("banner", &mut banner, -100.0, 0.0, 10);

    // Grow and shrink three times.
    let mut pulse = Sequence::new(
        1.0,
        (0..3).flat_map(|_| [Step::timing(1.3, 0.25), Step::timing(1.0, 0.25)]),
    );
    run("pulse", &mut pulse, 1.0, 1.3, 5);

    // Expand a button with a bouncy origami preset.
    let bouncy = SpringConfig::from_tension_friction(100.0, 8.0);
    println!(
        "spring: stiffness {:.1}, damping {:.1}, ratio {:.3}",
        bouncy.stiffness,
        bouncy.damping,
        bouncy.damping_ratio()
    );
    let mut button = Spring::new(48.0, 160.0, bouncy);
    run("button", &mut button, 48.0, 180.0, 3);
}
