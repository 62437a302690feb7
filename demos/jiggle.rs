//! Mouse jiggler example.
//!
//! Nudges the pointer back and forth every few seconds until Ctrl+C.
//!
//! Run with: cargo run --example jiggle -- [x] [y]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;
use std::time::Duration;
use uiosim::EventSimulator;

const STEP: i16 = 8;
const INTERVAL: Duration = Duration::from_secs(5);

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<i16>());
    let x = args.next().and_then(|a| a.ok()).unwrap_or(400);
    let y = args.next().and_then(|a| a.ok()).unwrap_or(300);

    let simulator = match EventSimulator::new() {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Failed to create simulator: {e}");
            std::process::exit(1);
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    println!("Jiggling around ({x}, {y}). Press Ctrl+C to stop.");

    let mut offset = STEP;
    while running.load(Ordering::SeqCst) {
        if let Err(e) = simulator.simulate_mouse_movement(x.saturating_add(offset), y) {
            eprintln!("Move failed: {e}");
            break;
        }
        offset = -offset;

        // Sleep in short slices so Ctrl+C is noticed promptly.
        let mut waited = Duration::ZERO;
        while waited < INTERVAL && running.load(Ordering::SeqCst) {
            sleep(Duration::from_millis(100));
            waited += Duration::from_millis(100);
        }
    }

    simulator.shutdown();
    println!("Stopped.");
}
