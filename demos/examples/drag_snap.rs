// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and snap back.
//!
//! Drives a `Draggable` through three gestures the way a host UI would: one
//! released inside the arena, one past the right edge, and one that grabs
//! the element again while it is still springing back.
//!
//! Run:
//! - `cargo run -p corral_demos --example drag_snap`
//! - `RUST_LOG=trace cargo run -p corral_demos --example drag_snap`
//! - `cargo run -p corral_demos --features serde --example drag_snap -- config.json`

use corral_demos::{FRAME, fmt_point, init_logging, run_snap_back};
use corral_drag::{Draggable, DraggableConfig, GestureEvent, PointerTracker};
use kurbo::{Point, Vec2};

#[cfg(feature = "serde")]
fn load_config() -> DraggableConfig {
    let Some(path) = std::env::args().nth(1) else {
        return DraggableConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<DraggableConfig>(&text).map_err(|e| e.to_string()));
    loaded.unwrap_or_else(|err| {
        log::error!("could not load {path}: {err}; using defaults");
        DraggableConfig::default()
    })
}

#[cfg(not(feature = "serde"))]
fn load_config() -> DraggableConfig {
    DraggableConfig::default()
}

fn main() {
    init_logging();

    let mut item = match Draggable::new(load_config()) {
        Ok(item) => item,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "arena {} .. {}, element at {}",
        fmt_point(item.bounds().min()),
        fmt_point(item.bounds().max()),
        fmt_point(item.position())
    );

    // 1. A small drag that stays inside: no animation at all.
    item.handle(GestureEvent::Start);
    item.handle(GestureEvent::Move(Vec2::new(30.0, 20.0)));
    let r = item.handle(GestureEvent::End);
    println!("released inside at {}: {:?}", fmt_point(r.position), item.phase());

    // 2. A pointer drag past the right edge, fed as absolute coordinates.
    let mut pointer = PointerTracker::default();
    item.handle(pointer.down(Point::new(120.0, 110.0)));
    for x in [160.0, 220.0, 290.0, 340.0] {
        if let Some(event) = pointer.moved(Point::new(x, 120.0)) {
            let r = item.handle(event);
            println!("  drag {}", fmt_point(r.position));
        }
    }
    if let Some(event) = pointer.up() {
        item.handle(event);
    }
    if let Some(target) = item.snap_target() {
        println!(
            "released outside at {}, springing to {}",
            fmt_point(item.position()),
            fmt_point(target)
        );
    }
    let trail = run_snap_back(&mut item, 600);
    println!(
        "settled at {} after {} frames",
        fmt_point(item.position()),
        trail.len()
    );

    // 3. Throw it past the bottom-left corner, then catch it mid-flight.
    item.handle(GestureEvent::Start);
    item.handle(GestureEvent::Move(Vec2::new(-400.0, 300.0)));
    item.handle(GestureEvent::End);
    for _ in 0..6 {
        item.tick(FRAME);
    }
    let caught = item.position();
    item.handle(GestureEvent::Start);
    println!(
        "caught at {}, new session origin {:?}",
        fmt_point(caught),
        item.session_origin().map(fmt_point)
    );
    item.handle(GestureEvent::Move(Vec2::new(50.0, -50.0)));
    item.handle(GestureEvent::End);
    run_snap_back(&mut item, 600);
    println!("final position {}: {:?}", fmt_point(item.position()), item.phase());
}
