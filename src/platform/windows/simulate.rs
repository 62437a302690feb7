//! Windows event simulation using SendInput.

#![allow(unused_unsafe)]

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::event::{Button, Coordinate, WheelEvent};
use crate::keycode::Key;
use std::mem::size_of;
use windows::Win32::Foundation::{ERROR_ACCESS_DENIED, GetLastError};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBD_EVENT_FLAGS, KEYBDINPUT,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MAPVK_VK_TO_VSC, MOUSE_EVENT_FLAGS,
    MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN,
    MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP,
    MOUSEEVENTF_VIRTUALDESK, MOUSEEVENTF_WHEEL, MOUSEEVENTF_XDOWN, MOUSEEVENTF_XUP, MOUSEINPUT,
    MapVirtualKeyW, SendInput, VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN,
    SM_YVIRTUALSCREEN,
};

use super::keycodes::{is_extended, key_to_keycode};

const WHEEL_DELTA: i32 = 120;
const XBUTTON1: u32 = 0x0001;
const XBUTTON2: u32 = 0x0002;

/// Full scale of absolute mouse coordinates.
const ABSOLUTE_RANGE: i64 = 65535;

/// Backend that injects events with `SendInput`.
///
/// Every operation is a single `INPUT` record, so the OS either queues the
/// whole event or nothing.
#[derive(Debug, Default)]
pub struct WindowsBackend {
    _private: (),
}

impl WindowsBackend {
    pub fn new() -> Result<Self> {
        Ok(Self::default())
    }
}

/// Submit one input record.
fn send(input: INPUT, what: &str) -> Result<()> {
    let inputs = [input];
    let sent = unsafe { SendInput(&inputs, size_of::<INPUT>() as i32) };
    if sent == 1 {
        return Ok(());
    }

    let code = unsafe { GetLastError() };
    if code == ERROR_ACCESS_DENIED {
        Err(Error::PermissionDenied(format!(
            "SendInput was refused for {what}; the target may run at a higher integrity level"
        )))
    } else {
        Err(Error::NativeCallFailed(format!(
            "SendInput failed for {what} (error {})",
            code.0
        )))
    }
}

/// Send a mouse event
fn sim_mouse_event(flags: MOUSE_EVENT_FLAGS, data: u32, dx: i32, dy: i32) -> Result<()> {
    let input = INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: data,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };
    send(input, "mouse event")
}

/// Send a keyboard event
fn sim_keyboard_event(key: Key, pressed: bool) -> Result<()> {
    let vk = key_to_keycode(key).ok_or_else(|| {
        Error::UnsupportedOnPlatform(format!("no Windows virtual-key code for {:?}", key))
    })?;

    let mut flags = KEYBD_EVENT_FLAGS(0);
    if is_extended(key) {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    if !pressed {
        flags |= KEYEVENTF_KEYUP;
    }

    let scan = unsafe { MapVirtualKeyW(u32::from(vk), MAPVK_VK_TO_VSC) };

    let input = INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(vk),
                wScan: scan as u16,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };
    send(input, "keyboard event")
}

/// Convert a screen position to the 0..=65535 range spanning the virtual
/// desktop. Positions off the desktop fall outside that range and are left
/// for the OS to clamp.
fn normalize(to: Coordinate) -> Result<(i32, i32)> {
    let (left, top, width, height) = unsafe {
        (
            GetSystemMetrics(SM_XVIRTUALSCREEN),
            GetSystemMetrics(SM_YVIRTUALSCREEN),
            GetSystemMetrics(SM_CXVIRTUALSCREEN),
            GetSystemMetrics(SM_CYVIRTUALSCREEN),
        )
    };

    if width <= 1 || height <= 1 {
        return Err(Error::NativeCallFailed("Failed to get screen metrics".into()));
    }

    Ok((
        scale(i32::from(to.x) - left, width),
        scale(i32::from(to.y) - top, height),
    ))
}

/// Windows maps an absolute value back to `floor(value * extent / 65536)`,
/// so aim at the far edge of the pixel to land inside it.
fn scale(offset: i32, extent: i32) -> i32 {
    let value = (i64::from(offset) + 1) * ABSOLUTE_RANGE / i64::from(extent);
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Wheel rotation in native units; positive scrolls away from the user.
fn wheel_data(wheel: &WheelEvent) -> u32 {
    (wheel.distance() * WHEEL_DELTA) as u32
}

fn button_flags(button: Button, pressed: bool) -> (MOUSE_EVENT_FLAGS, u32) {
    match (button, pressed) {
        (Button::Left, true) => (MOUSEEVENTF_LEFTDOWN, 0),
        (Button::Left, false) => (MOUSEEVENTF_LEFTUP, 0),
        (Button::Right, true) => (MOUSEEVENTF_RIGHTDOWN, 0),
        (Button::Right, false) => (MOUSEEVENTF_RIGHTUP, 0),
        (Button::Middle, true) => (MOUSEEVENTF_MIDDLEDOWN, 0),
        (Button::Middle, false) => (MOUSEEVENTF_MIDDLEUP, 0),
        (Button::Button4, true) => (MOUSEEVENTF_XDOWN, XBUTTON1),
        (Button::Button4, false) => (MOUSEEVENTF_XUP, XBUTTON1),
        (Button::Button5, true) => (MOUSEEVENTF_XDOWN, XBUTTON2),
        (Button::Button5, false) => (MOUSEEVENTF_XUP, XBUTTON2),
    }
}

impl Backend for WindowsBackend {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        sim_keyboard_event(key, true)
    }

    fn release_key(&mut self, key: Key) -> Result<()> {
        sim_keyboard_event(key, false)
    }

    fn press_button(&mut self, button: Button) -> Result<()> {
        let (flags, data) = button_flags(button, true);
        sim_mouse_event(flags, data, 0, 0)
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        let (flags, data) = button_flags(button, false);
        sim_mouse_event(flags, data, 0, 0)
    }

    fn move_mouse(&mut self, to: Coordinate) -> Result<()> {
        let (dx, dy) = normalize(to)?;
        sim_mouse_event(
            MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_VIRTUALDESK,
            0,
            dx,
            dy,
        )
    }

    fn scroll_wheel(&mut self, wheel: WheelEvent) -> Result<()> {
        let (dx, dy) = normalize(wheel.position())?;
        // Motion and rotation travel in the same record.
        sim_mouse_event(
            MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_VIRTUALDESK | MOUSEEVENTF_WHEEL,
            wheel_data(&wheel),
            dx,
            dy,
        )
    }
}
