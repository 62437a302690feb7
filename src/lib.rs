//! # uiosim
//!
//! A pure Rust cross-platform engine for simulating keyboard and mouse input.
//!
//! ## Features
//!
//! - Cross-platform support (macOS, Windows, Linux/X11)
//! - Six operations: key press/release, button press/release, pointer
//!   movement and wheel scrolling
//! - One closed error taxonomy on every platform ([`Error`], [`ResultCode`])
//! - Thread-safe: concurrent calls are serialized in arrival order
//!
//! ## Quick Start
//!
//! ```no_run
//! use uiosim::{Button, EventSimulator, Key};
//!
//! let simulator = EventSimulator::new()?;
//!
//! simulator.simulate_mouse_movement(100, 100)?;
//! simulator.simulate_mouse_press(Button::Left)?;
//! simulator.simulate_mouse_release(Button::Left)?;
//!
//! simulator.simulate_key_press(Key::ShiftLeft)?;
//! simulator.simulate_key_press(Key::KeyA)?;
//! simulator.simulate_key_release(Key::KeyA)?;
//! simulator.simulate_key_release(Key::ShiftLeft)?;
//!
//! // Scroll three lines up at (100, 100)
//! simulator.simulate_mouse_wheel(100, 100, 3, 1)?;
//! # Ok::<(), uiosim::Error>(())
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<(), Error>`; nothing is retried or logged
//! on failure. Keys without a native equivalent fail with
//! [`Error::UnsupportedOnPlatform`], malformed input with
//! [`Error::InvalidArgument`] before any native call is made, and refusals
//! by the OS with [`Error::PermissionDenied`] or [`Error::NativeCallFailed`].
//! Use [`ResultCode`] when a flat numeric outcome is needed.
//!
//! ## Architecture
//!
//! [`EventSimulator`] validates arguments and owns one [`Backend`] behind a
//! fair lock. The backend for the current OS is [`NativeBackend`]; any other
//! [`Backend`] implementation can be plugged in with
//! [`EventSimulator::with_backend`].

pub mod backend;
pub mod error;
pub mod event;
pub mod keycode;
pub mod simulator;
#[cfg(any(target_os = "macos", test))]
mod state;

mod platform;

// Re-exports
pub use backend::Backend;
pub use error::{Error, Result, ResultCode};
pub use event::{Button, Coordinate, MAX_SCROLL_DISTANCE, ScrollDirection, WheelEvent};
pub use keycode::Key;
pub use platform::NativeBackend;
pub use simulator::{
    EventSimulator, simulate_key_press, simulate_key_release, simulate_mouse_movement,
    simulate_mouse_press, simulate_mouse_release, simulate_mouse_wheel,
};
