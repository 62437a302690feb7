//! X11 event simulation using XTest.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::event::{Button, Coordinate, WheelEvent};
use crate::keycode::Key;
use std::os::raw::{c_int, c_uint};
use std::ptr::{NonNull, null};
use x11::xlib;
use x11::xtest;

use crate::platform::linux::keycodes::key_to_keycode;

const TRUE: c_int = 1;
const FALSE: c_int = 0;

/// XTest screen argument meaning "the screen the pointer is on".
const CURRENT_SCREEN: c_int = -1;

// Core protocol buttons 4-7 are the wheel, so extra buttons start at 8.
const WHEEL_UP: c_uint = 4;
const WHEEL_DOWN: c_uint = 5;

/// Backend that injects events with the XTest extension.
///
/// Holds one display connection for its whole lifetime.
pub struct X11Backend {
    display: NonNull<xlib::Display>,
}

// SAFETY: the display connection is only used through `&mut self`, and the
// simulator never lets two threads reach the backend at once.
unsafe impl Send for X11Backend {}

impl X11Backend {
    /// Open the default display and check that XTest is present.
    pub fn new() -> Result<Self> {
        let display = NonNull::new(unsafe { xlib::XOpenDisplay(null()) })
            .ok_or_else(|| Error::NotInitialized("failed to open X display".into()))?;
        // Dropping `backend` closes the display if the checks below fail.
        let backend = Self { display };

        let mut event_base: c_int = 0;
        let mut error_base: c_int = 0;
        let mut major: c_int = 0;
        let mut minor: c_int = 0;
        let present = unsafe {
            xtest::XTestQueryExtension(
                backend.display.as_ptr(),
                &mut event_base,
                &mut error_base,
                &mut major,
                &mut minor,
            )
        };
        if present == FALSE {
            return Err(Error::NotInitialized(
                "XTest extension is not available on this X server".into(),
            ));
        }

        log::debug!("using XTest {}.{}", major, minor);
        Ok(backend)
    }

    fn display(&self) -> *mut xlib::Display {
        self.display.as_ptr()
    }

    /// Push queued requests to the server and wait until they are processed.
    fn flush(&self) {
        unsafe {
            xlib::XFlush(self.display());
            xlib::XSync(self.display(), FALSE);
        }
    }

    fn fake_key(&mut self, key: Key, pressed: bool) -> Result<()> {
        let keycode = key_to_keycode(key)
            .ok_or_else(|| Error::UnsupportedOnPlatform(format!("no X11 keycode for {:?}", key)))?;

        let is_press = if pressed { TRUE } else { FALSE };
        let result = unsafe { xtest::XTestFakeKeyEvent(self.display(), keycode, is_press, 0) };
        self.flush();

        if result == 0 {
            Err(Error::NativeCallFailed("XTestFakeKeyEvent failed".into()))
        } else {
            Ok(())
        }
    }

    fn fake_button(&mut self, button: Button, pressed: bool) -> Result<()> {
        let is_press = if pressed { TRUE } else { FALSE };
        let result = unsafe {
            xtest::XTestFakeButtonEvent(self.display(), button_to_code(button), is_press, 0)
        };
        self.flush();

        if result == 0 {
            Err(Error::NativeCallFailed("XTestFakeButtonEvent failed".into()))
        } else {
            Ok(())
        }
    }

    /// Queue a motion event without flushing.
    fn queue_motion(&self, to: Coordinate) -> bool {
        let result = unsafe {
            xtest::XTestFakeMotionEvent(
                self.display(),
                CURRENT_SCREEN,
                c_int::from(to.x),
                c_int::from(to.y),
                0,
            )
        };
        result != 0
    }
}

impl Drop for X11Backend {
    fn drop(&mut self) {
        unsafe { xlib::XCloseDisplay(self.display()) };
    }
}

/// Get X11 button code
fn button_to_code(button: Button) -> c_uint {
    match button {
        Button::Left => 1,
        Button::Middle => 2,
        Button::Right => 3,
        Button::Button4 => 8,
        Button::Button5 => 9,
    }
}

/// Wheel button clicked for a scroll; positive distance scrolls up.
fn wheel_button(wheel: &WheelEvent) -> c_uint {
    if wheel.distance() > 0 {
        WHEEL_UP
    } else {
        WHEEL_DOWN
    }
}

impl Backend for X11Backend {
    fn name(&self) -> &'static str {
        "x11"
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        self.fake_key(key, true)
    }

    fn release_key(&mut self, key: Key) -> Result<()> {
        self.fake_key(key, false)
    }

    fn press_button(&mut self, button: Button) -> Result<()> {
        self.fake_button(button, true)
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        self.fake_button(button, false)
    }

    fn move_mouse(&mut self, to: Coordinate) -> Result<()> {
        let queued = self.queue_motion(to);
        self.flush();

        if queued {
            Ok(())
        } else {
            Err(Error::NativeCallFailed("XTestFakeMotionEvent failed".into()))
        }
    }

    fn scroll_wheel(&mut self, wheel: WheelEvent) -> Result<()> {
        // X11 scroll is done via button clicks, queued behind the motion and
        // sent in one flush.
        if !self.queue_motion(wheel.position()) {
            self.flush();
            return Err(Error::NativeCallFailed("XTestFakeMotionEvent failed".into()));
        }

        let button = wheel_button(&wheel);

        let mut success = true;
        for _ in 0..wheel.distance().unsigned_abs() {
            let pressed = unsafe { xtest::XTestFakeButtonEvent(self.display(), button, TRUE, 0) };
            // The release goes out even if the press was refused so no wheel
            // button is ever left down.
            let released =
                unsafe { xtest::XTestFakeButtonEvent(self.display(), button, FALSE, 0) };
            if pressed == 0 || released == 0 {
                success = false;
                break;
            }
        }
        self.flush();

        if success {
            Ok(())
        } else {
            Err(Error::NativeCallFailed("XTestFakeButtonEvent failed".into()))
        }
    }
}
