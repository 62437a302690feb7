//! macOS event simulation using CGEvent.

#![allow(unused_unsafe)]

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::event::{Button, Coordinate, WheelEvent};
use crate::keycode::Key;
use crate::state::{
    InputState, MASK_ALT, MASK_BUTTON1, MASK_BUTTON2, MASK_CTRL, MASK_META, MASK_SHIFT,
    button_to_mask, key_to_mask,
};
use objc2_core_foundation::{CFRetained, CGPoint};
use objc2_core_graphics::{
    CGEvent, CGEventField, CGEventFlags, CGEventSource, CGEventSourceStateID, CGEventTapLocation,
    CGEventType, CGMouseButton, CGPreflightPostEventAccess, CGScrollEventUnit,
};

use super::keycodes::key_to_keycode;

/// Backend that posts `CGEvent`s at the HID event tap.
///
/// Tracks the modifiers and buttons it has pressed so every event carries
/// the right flags and pointer motion with a held button is posted as a drag.
/// Button events are placed at the last position it moved the pointer to.
#[derive(Debug, Default)]
pub struct MacBackend {
    state: InputState,
    last_position: Option<Coordinate>,
}

impl MacBackend {
    pub fn new() -> Result<Self> {
        Ok(Self {
            state: InputState::new(),
            last_position: None,
        })
    }

    /// Where a button event goes: the last injected position, or the
    /// cursor's current location before any motion was injected.
    fn button_location(&self) -> Result<CGPoint> {
        match self.last_position {
            Some(position) => Ok(to_point(position)),
            None => current_mouse_location(),
        }
    }

    fn post_key(&mut self, key: Key, pressed: bool) -> Result<()> {
        let keycode = key_to_keycode(key)
            .ok_or_else(|| Error::UnsupportedOnPlatform(format!("no macOS keycode for {:?}", key)))?;
        ensure_post_access()?;

        let source = new_source()?;
        let pending = self.state.with_key(key, pressed);

        unsafe {
            let event = if key.is_modifier() {
                // For modifier keys, use FlagsChanged event type
                let event = CGEvent::new(Some(&source))
                    .ok_or_else(|| Error::NativeCallFailed("Failed to create event".into()))?;
                CGEvent::set_type(Some(&event), CGEventType::FlagsChanged);
                CGEvent::set_integer_value_field(
                    Some(&event),
                    CGEventField::KeyboardEventKeycode,
                    keycode as i64,
                );
                event
            } else {
                CGEvent::new_keyboard_event(Some(&source), keycode, pressed).ok_or_else(|| {
                    Error::NativeCallFailed("Failed to create keyboard event".into())
                })?
            };

            CGEvent::set_flags(Some(&event), mask_to_flags(pending));
            CGEvent::post(CGEventTapLocation::HIDEventTap, Some(&event));
        }

        // Commit only after the event went out.
        if pressed {
            self.state.set(key_to_mask(key));
        } else {
            self.state.unset(key_to_mask(key));
        }
        Ok(())
    }

    fn post_button(&mut self, button: Button, pressed: bool) -> Result<()> {
        ensure_post_access()?;
        let point = self.button_location()?;

        let event_type = match (button, pressed) {
            (Button::Left, true) => CGEventType::LeftMouseDown,
            (Button::Left, false) => CGEventType::LeftMouseUp,
            (Button::Right, true) => CGEventType::RightMouseDown,
            (Button::Right, false) => CGEventType::RightMouseUp,
            (_, true) => CGEventType::OtherMouseDown,
            (_, false) => CGEventType::OtherMouseUp,
        };

        unsafe {
            let source = new_source()?;
            let event = CGEvent::new_mouse_event(
                Some(&source),
                event_type,
                point,
                button_to_cg_button(button),
            )
            .ok_or_else(|| Error::NativeCallFailed("Failed to create mouse event".into()))?;

            // Set button number for other mouse buttons
            if let Button::Middle | Button::Button4 | Button::Button5 = button {
                CGEvent::set_integer_value_field(
                    Some(&event),
                    CGEventField::MouseEventButtonNumber,
                    (button.number() - 1) as i64,
                );
            }
            CGEvent::set_flags(Some(&event), mask_to_flags(self.state.mask()));
            CGEvent::post(CGEventTapLocation::HIDEventTap, Some(&event));
        }

        if pressed {
            self.state.set(button_to_mask(button));
        } else {
            self.state.unset(button_to_mask(button));
        }
        Ok(())
    }

    /// Build (but do not post) the motion event to `to`, as a drag when a
    /// button is held.
    fn motion_event(&self, source: &CGEventSource, to: Coordinate) -> Result<CFRetained<CGEvent>> {
        let (event_type, cg_button) = if self.state.is_set(MASK_BUTTON1) {
            (CGEventType::LeftMouseDragged, CGMouseButton::Left)
        } else if self.state.is_set(MASK_BUTTON2) {
            (CGEventType::RightMouseDragged, CGMouseButton::Right)
        } else if self.state.is_button_held() {
            (CGEventType::OtherMouseDragged, CGMouseButton::Center)
        } else {
            (CGEventType::MouseMoved, CGMouseButton::Left)
        };

        unsafe {
            let event =
                CGEvent::new_mouse_event(Some(source), event_type, to_point(to), cg_button)
                    .ok_or_else(|| Error::NativeCallFailed("Failed to create mouse event".into()))?;
            CGEvent::set_flags(Some(&event), mask_to_flags(self.state.mask()));
            Ok(event)
        }
    }
}

/// Fail early when the process may not post events; macOS would drop them
/// silently otherwise.
fn ensure_post_access() -> Result<()> {
    if unsafe { CGPreflightPostEventAccess() } {
        Ok(())
    } else {
        Err(Error::PermissionDenied(
            "posting events requires Accessibility permission for this process".into(),
        ))
    }
}

fn new_source() -> Result<CFRetained<CGEventSource>> {
    unsafe {
        CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .ok_or_else(|| Error::NativeCallFailed("Failed to create event source".into()))
    }
}

/// Get current mouse location
fn current_mouse_location() -> Result<CGPoint> {
    unsafe {
        let source = new_source()?;
        let event = CGEvent::new(Some(&source))
            .ok_or_else(|| Error::NativeCallFailed("Failed to create event".into()))?;
        Ok(CGEvent::location(Some(&event)))
    }
}

fn to_point(to: Coordinate) -> CGPoint {
    CGPoint {
        x: f64::from(to.x),
        y: f64::from(to.y),
    }
}

fn mask_to_flags(mask: u32) -> CGEventFlags {
    let mut flags = CGEventFlags(0);
    if mask & MASK_SHIFT != 0 {
        flags.insert(CGEventFlags::MaskShift);
    }
    if mask & MASK_CTRL != 0 {
        flags.insert(CGEventFlags::MaskControl);
    }
    if mask & MASK_ALT != 0 {
        flags.insert(CGEventFlags::MaskAlternate);
    }
    if mask & MASK_META != 0 {
        flags.insert(CGEventFlags::MaskCommand);
    }
    flags
}

/// Convert our Button to CGMouseButton.
fn button_to_cg_button(button: Button) -> CGMouseButton {
    match button {
        Button::Left => CGMouseButton::Left,
        Button::Right => CGMouseButton::Right,
        Button::Middle | Button::Button4 | Button::Button5 => CGMouseButton::Center,
    }
}

impl Backend for MacBackend {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        self.post_key(key, true)
    }

    fn release_key(&mut self, key: Key) -> Result<()> {
        self.post_key(key, false)
    }

    fn press_button(&mut self, button: Button) -> Result<()> {
        self.post_button(button, true)
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        self.post_button(button, false)
    }

    fn move_mouse(&mut self, to: Coordinate) -> Result<()> {
        ensure_post_access()?;
        let source = new_source()?;
        let event = self.motion_event(&source, to)?;

        unsafe { CGEvent::post(CGEventTapLocation::HIDEventTap, Some(&event)) };
        self.last_position = Some(to);
        Ok(())
    }

    fn scroll_wheel(&mut self, wheel: WheelEvent) -> Result<()> {
        ensure_post_access()?;
        let source = new_source()?;

        // Both events are built before either is posted, so a failure leaves
        // nothing half-sent.
        let motion = self.motion_event(&source, wheel.position())?;
        unsafe {
            let scroll = CGEvent::new_scroll_wheel_event2(
                Some(&source),
                CGScrollEventUnit::Line,
                1, // wheel_count
                wheel.distance(),
                0,
                0,
            )
            .ok_or_else(|| Error::NativeCallFailed("Failed to create scroll event".into()))?;
            CGEvent::set_location(Some(&scroll), to_point(wheel.position()));
            CGEvent::set_flags(Some(&scroll), mask_to_flags(self.state.mask()));

            CGEvent::post(CGEventTapLocation::HIDEventTap, Some(&motion));
            CGEvent::post(CGEventTapLocation::HIDEventTap, Some(&scroll));
        }
        self.last_position = Some(wheel.position());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MASK_ALT_R, MASK_SHIFT_L};

    #[test]
    fn test_mask_to_flags() {
        assert_eq!(mask_to_flags(0), CGEventFlags(0));

        let flags = mask_to_flags(MASK_SHIFT_L | MASK_ALT_R);
        assert!(flags.contains(CGEventFlags::MaskShift));
        assert!(flags.contains(CGEventFlags::MaskAlternate));
        assert!(!flags.contains(CGEventFlags::MaskCommand));
    }

    #[test]
    fn test_unsupported_key_leaves_state_untouched() {
        let mut backend = MacBackend::new().unwrap();
        assert!(matches!(
            backend.press_key(Key::F24),
            Err(Error::UnsupportedOnPlatform(_))
        ));
        assert!(matches!(
            backend.release_key(Key::MediaPlayPause),
            Err(Error::UnsupportedOnPlatform(_))
        ));
        assert_eq!(backend.state.mask(), 0);
    }

    #[test]
    fn test_buttons_follow_last_injected_position() {
        let mut backend = MacBackend::new().unwrap();
        backend.last_position = Some(Coordinate::new(-40, 300));

        let point = backend.button_location().unwrap();
        assert_eq!((point.x, point.y), (-40.0, 300.0));
    }

    #[test]
    fn test_extra_buttons_use_center_button() {
        assert_eq!(button_to_cg_button(Button::Button4), CGMouseButton::Center);
        assert_eq!(button_to_cg_button(Button::Left), CGMouseButton::Left);
    }
}
