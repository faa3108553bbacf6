// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated slideshow session that exercises the tracing pipeline.
//!
//! Drives a three-slide controller on a [`VirtualTimers`] clock through auto
//! advance, hover pause, swipes, a tap and button presses, printing every
//! trace event with a [`PrettyPrintSink`]. Pass a path to also write the
//! events as JSON lines.
//!
//! Run with: `cargo run -p slideshow_trace -- [trace.jsonl]`

use std::fs::File;
use std::io::{self, BufWriter, Write};

use vitrine_core::slideshow::{Direction, Slideshow, SlideshowConfig};
use vitrine_core::surface::Surface;
use vitrine_core::time::{Duration, HostTime};
use vitrine_core::timer::VirtualTimers;

use vitrine_debug::json::JsonLinesSink;
use vitrine_debug::pretty::PrettyPrintSink;
use vitrine_debug::tee::Tee;

const SLIDES: [&str; 3] = ["harbour.jpg", "studio.jpg", "workshop.jpg"];

/// Named slides that print when shown.
struct Slides {
    names: &'static [&'static str],
}

impl Surface for Slides {
    fn item_count(&self) -> usize {
        self.names.len()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if visible {
            println!("  showing {}", self.names[index]);
        }
    }
}

fn main() {
    let json_path = std::env::args().nth(1);
    let json_out: Box<dyn Write> = match &json_path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).expect("failed to create trace file"),
        )),
        None => Box::new(io::sink()),
    };

    let sink = Tee::new(
        PrettyPrintSink::new(Box::new(io::stdout())),
        JsonLinesSink::new(json_out),
    );
    let config = SlideshowConfig::portfolio();
    let period = config.period;

    let mut show = Slideshow::with_sink(
        Slides { names: &SLIDES },
        VirtualTimers::new(HostTime::ZERO),
        config,
        sink,
    );

    // -- auto advance ------------------------------------------------------
    println!("# two periods of auto advance");
    show.run_for(period.saturating_mul(2));

    // -- hover -------------------------------------------------------------
    println!("# pointer rests on the slideshow for 20s");
    show.pause();
    show.run_for(Duration::from_secs(20));
    show.resume();
    show.run_for(Duration::from_millis(3_000));

    // -- gestures ----------------------------------------------------------
    println!("# swipe left, swipe right, then a tap");
    for (start, end) in [(300.0, 225.0), (100.0, 190.0), (200.0, 230.0)] {
        show.handle_gesture_start(start);
        show.run_for(Duration::from_millis(250));
        show.handle_gesture_end(end);
    }

    // -- buttons -----------------------------------------------------------
    println!("# previous, previous, next");
    show.run_for(Duration::from_millis(4_000));
    for direction in [Direction::Backward, Direction::Backward, Direction::Forward] {
        show.handle_manual_advance(direction);
        show.run_for(Duration::from_millis(1_000));
    }
    show.run_for(period);

    println!(
        "# finished on slide {:?} after {} timer starts",
        show.cursor(),
        show.timers().started_count(),
    );
    drop(show);

    if let Some(path) = json_path {
        println!("Wrote {path}");
    }
}
