// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Corral demos.
//!
//! The demos are headless: they stand in for a host UI by feeding gesture
//! events and display-refresh ticks, and print positions as text.

use corral_drag::{Draggable, Phase};
use kurbo::Point;

/// One display refresh at 60 Hz.
pub const FRAME: f64 = 1.0 / 60.0;

/// Installs `env_logger`, defaulting to `debug` for the Corral crates.
///
/// `RUST_LOG` still overrides the default. If another logger is already
/// installed it stays in place and a note goes to stderr.
pub fn init_logging() {
    if let Err(err) = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("corral_drag=debug,corral_motion=debug"),
    )
    .format_timestamp(None)
    .try_init()
    {
        eprintln!("keeping the existing logger: {err}");
    }
}


/// Ticks `item` at [`FRAME`] until its snap-back settles.
///
/// Returns the positions applied along the way. Gives up after `max_frames`.
pub fn run_snap_back(item: &mut Draggable, max_frames: usize) -> Vec<Point> {
    let mut trail = Vec::new();
    for _ in 0..max_frames {
        if item.phase() != Phase::SnappingBack {
            break;
        }
        let r = item.tick(FRAME);
        if r.moved {
            trail.push(r.position);
        }
    }
    if item.phase() == Phase::SnappingBack {
        log::warn!("snap-back still running after {max_frames} frames");
    }
    trail
}

/// Formats a point with one decimal, the way the demos print positions.
pub fn fmt_point(p: Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}
