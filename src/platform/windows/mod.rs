//! Windows implementation using SendInput.

mod keycodes;
mod simulate;

pub use simulate::WindowsBackend;

/// The backend used by default on Windows.
pub type NativeBackend = WindowsBackend;
