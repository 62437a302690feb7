//! X11 implementation using XTest.

mod simulate;

pub use simulate::X11Backend;

/// The backend used by default on Linux.
pub type NativeBackend = X11Backend;
