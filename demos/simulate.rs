//! Event simulation example.
//!
//! Run with: cargo run --example simulate
//!
//! WARNING: This will actually move your mouse and type keys!

use uiosim::{Button, EventSimulator, Key, ResultCode};
use std::thread::sleep;
use std::time::Duration;

fn report(step: &str, result: uiosim::Result<()>) {
    let code = ResultCode::from(&result);
    match result {
        Ok(()) => println!("   {step}: done"),
        Err(e) => eprintln!("   {step}: {code} ({e})"),
    }
    sleep(Duration::from_millis(300));
}

fn main() {
    println!("uiosim simulation example");
    println!("=========================\n");
    println!("WARNING: This will move your mouse and simulate key presses!\n");

    let simulator = match EventSimulator::new() {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Failed to create simulator: {e}");
            std::process::exit(1);
        }
    };

    println!("Starting in 3 seconds... (Press Ctrl+C to cancel)\n");
    sleep(Duration::from_secs(3));

    println!("1. Moving mouse");
    report("move to (100, 100)", simulator.simulate_mouse_movement(100, 100));
    report("move to (200, 200)", simulator.simulate_mouse_movement(200, 200));

    println!("2. Left click");
    report("press left", simulator.simulate_mouse_press(Button::Left));
    report("release left", simulator.simulate_mouse_release(Button::Left));

    println!("3. Typing 'A' with shift held");
    report("press shift", simulator.simulate_key_press(Key::ShiftLeft));
    report("press A", simulator.simulate_key_press(Key::KeyA));
    report("release A", simulator.simulate_key_release(Key::KeyA));
    report("release shift", simulator.simulate_key_release(Key::ShiftLeft));

    println!("4. Scrolling");
    report("3 steps up", simulator.simulate_mouse_wheel(200, 200, 3, 1));
    report("3 steps down", simulator.simulate_mouse_wheel(200, 200, 3, -1));

    println!("5. Raw codes and rejected input");
    // 0x001E is the raw code for A.
    report("press raw 0x001E", simulator.simulate_key_press(0x001Eu16));
    report("release raw 0x001E", simulator.simulate_key_release(0x001Eu16));
    report("press button 6", simulator.simulate_mouse_press(6u8));

    println!("\nDone!");
}
