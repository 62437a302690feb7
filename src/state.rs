//! Held modifier and button tracking for backends that must stamp state onto
//! every injected event.
//!
//! Each backend owns its own [`InputState`]; it is only touched while the
//! simulator's lock is held, so plain integers suffice.

use crate::event::Button;
use crate::keycode::Key;

// Button masks
/// Left mouse button mask.
pub const MASK_BUTTON1: u32 = 1 << 8;
/// Right mouse button mask.
pub const MASK_BUTTON2: u32 = 1 << 9;
/// Middle mouse button mask.
pub const MASK_BUTTON3: u32 = 1 << 10;
/// Extra button 1 (X1) mask.
pub const MASK_BUTTON4: u32 = 1 << 11;
/// Extra button 2 (X2) mask.
pub const MASK_BUTTON5: u32 = 1 << 12;

// Keyboard modifier masks, one bit per side
pub const MASK_SHIFT_L: u32 = 1 << 0;
pub const MASK_CTRL_L: u32 = 1 << 1;
pub const MASK_META_L: u32 = 1 << 2;
pub const MASK_ALT_L: u32 = 1 << 3;
pub const MASK_SHIFT_R: u32 = 1 << 4;
pub const MASK_CTRL_R: u32 = 1 << 5;
pub const MASK_META_R: u32 = 1 << 6;
pub const MASK_ALT_R: u32 = 1 << 7;

pub const MASK_SHIFT: u32 = MASK_SHIFT_L | MASK_SHIFT_R;
pub const MASK_CTRL: u32 = MASK_CTRL_L | MASK_CTRL_R;
pub const MASK_META: u32 = MASK_META_L | MASK_META_R;
pub const MASK_ALT: u32 = MASK_ALT_L | MASK_ALT_R;

/// All button masks combined.
pub const MASK_ALL_BUTTONS: u32 =
    MASK_BUTTON1 | MASK_BUTTON2 | MASK_BUTTON3 | MASK_BUTTON4 | MASK_BUTTON5;

/// Modifiers and buttons currently held by simulated input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    mask: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    #[inline]
    pub fn set(&mut self, mask: u32) {
        self.mask |= mask;
    }

    #[inline]
    pub fn unset(&mut self, mask: u32) {
        self.mask &= !mask;
    }

    /// The mask after applying a key transition, without committing it.
    pub fn with_key(&self, key: Key, pressed: bool) -> u32 {
        let bit = key_to_mask(key);
        if pressed {
            self.mask | bit
        } else {
            self.mask & !bit
        }
    }

    #[inline]
    pub fn is_set(&self, mask: u32) -> bool {
        (self.mask & mask) != 0
    }

    /// Check if any mouse button is currently held.
    #[inline]
    pub fn is_button_held(&self) -> bool {
        self.is_set(MASK_ALL_BUTTONS)
    }
}

/// Get the modifier mask for a key (0 for non-modifiers).
pub fn key_to_mask(key: Key) -> u32 {
    match key {
        Key::ShiftLeft => MASK_SHIFT_L,
        Key::ShiftRight => MASK_SHIFT_R,
        Key::ControlLeft => MASK_CTRL_L,
        Key::ControlRight => MASK_CTRL_R,
        Key::MetaLeft => MASK_META_L,
        Key::MetaRight => MASK_META_R,
        Key::AltLeft => MASK_ALT_L,
        Key::AltRight => MASK_ALT_R,
        _ => 0,
    }
}

/// Get the mask for a button.
pub fn button_to_mask(button: Button) -> u32 {
    match button {
        Button::Left => MASK_BUTTON1,
        Button::Right => MASK_BUTTON2,
        Button::Middle => MASK_BUTTON3,
        Button::Button4 => MASK_BUTTON4,
        Button::Button5 => MASK_BUTTON5,
    }
}
