//! The platform backend trait.

use crate::error::Result;
use crate::event::{Button, Coordinate, WheelEvent};
use crate::keycode::Key;

/// Translates descriptors into native input injection.
///
/// Every method makes exactly one native attempt and reports its outcome;
/// implementations never retry. A key or button with no native equivalent
/// yields [`Error::UnsupportedOnPlatform`](crate::Error::UnsupportedOnPlatform)
/// without touching the OS.
///
/// The simulator serializes all calls, so methods take `&mut self` and
/// implementations need no locking of their own.
///
/// Implement this trait to drive an [`EventSimulator`](crate::EventSimulator)
/// with something other than the native backend, for example a recording
/// double in tests.
pub trait Backend: Send {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Press a key.
    fn press_key(&mut self, key: Key) -> Result<()>;

    /// Release a key.
    fn release_key(&mut self, key: Key) -> Result<()>;

    /// Press a mouse button at the current pointer position.
    fn press_button(&mut self, button: Button) -> Result<()>;

    /// Release a mouse button at the current pointer position.
    fn release_button(&mut self, button: Button) -> Result<()>;

    /// Move the pointer to an absolute screen position.
    fn move_mouse(&mut self, to: Coordinate) -> Result<()>;

    /// Move the pointer to the wheel event's position and scroll there.
    ///
    /// The motion must reach the OS before (or together with) the scroll.
    fn scroll_wheel(&mut self, wheel: WheelEvent) -> Result<()>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        (**self).press_key(key)
    }

    fn release_key(&mut self, key: Key) -> Result<()> {
        (**self).release_key(key)
    }

    fn press_button(&mut self, button: Button) -> Result<()> {
        (**self).press_button(button)
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        (**self).release_button(button)
    }

    fn move_mouse(&mut self, to: Coordinate) -> Result<()> {
        (**self).move_mouse(to)
    }

    fn scroll_wheel(&mut self, wheel: WheelEvent) -> Result<()> {
        (**self).scroll_wheel(wheel)
    }
}
