//! Linux platform implementation.
//!
//! ## Feature Flags
//!
//! - `x11` (default): inject events through the XTest extension. Requires a
//!   running X server (or XWayland) reachable through `$DISPLAY`.
//!
//! Without any backend feature, creating the native backend fails with
//! [`Error::UnsupportedOnPlatform`](crate::Error::UnsupportedOnPlatform).

#[cfg(feature = "x11")]
mod keycodes;

#[cfg(feature = "x11")]
mod x11;

#[cfg(feature = "x11")]
pub use x11::*;

// If no backend feature is enabled, provide a backend that cannot be created
#[cfg(not(feature = "x11"))]
mod stub {
    use crate::backend::Backend;
    use crate::error::{Error, Result};
    use crate::event::{Button, Coordinate, WheelEvent};
    use crate::keycode::Key;
    use std::convert::Infallible;

    /// Placeholder backend; [`UnavailableBackend::new`] always fails, so no
    /// value of this type ever exists.
    pub struct UnavailableBackend(Infallible);

    impl UnavailableBackend {
        pub fn new() -> Result<Self> {
            Err(Error::UnsupportedOnPlatform(
                "No Linux backend enabled. Enable the 'x11' feature.".into(),
            ))
        }
    }

    impl Backend for UnavailableBackend {
        fn name(&self) -> &'static str {
            match self.0 {}
        }

        fn press_key(&mut self, _key: Key) -> Result<()> {
            match self.0 {}
        }

        fn release_key(&mut self, _key: Key) -> Result<()> {
            match self.0 {}
        }

        fn press_button(&mut self, _button: Button) -> Result<()> {
            match self.0 {}
        }

        fn release_button(&mut self, _button: Button) -> Result<()> {
            match self.0 {}
        }

        fn move_mouse(&mut self, _to: Coordinate) -> Result<()> {
            match self.0 {}
        }

        fn scroll_wheel(&mut self, _wheel: WheelEvent) -> Result<()> {
            match self.0 {}
        }
    }

    /// The backend used by default on Linux.
    pub type NativeBackend = UnavailableBackend;
}

#[cfg(not(feature = "x11"))]
pub use stub::*;
