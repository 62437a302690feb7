//! Windows virtual-key code mappings.

use crate::keycode::Key;

/// Convert our Key enum to a Windows virtual-key code.
///
/// Returns `None` for keys that have no virtual-key code on standard
/// Windows keyboards.
pub fn key_to_keycode(key: Key) -> Option<u16> {
    Some(match key {
        // Letters
        Key::KeyA => 0x41,
        Key::KeyB => 0x42,
        Key::KeyC => 0x43,
        Key::KeyD => 0x44,
        Key::KeyE => 0x45,
        Key::KeyF => 0x46,
        Key::KeyG => 0x47,
        Key::KeyH => 0x48,
        Key::KeyI => 0x49,
        Key::KeyJ => 0x4A,
        Key::KeyK => 0x4B,
        Key::KeyL => 0x4C,
        Key::KeyM => 0x4D,
        Key::KeyN => 0x4E,
        Key::KeyO => 0x4F,
        Key::KeyP => 0x50,
        Key::KeyQ => 0x51,
        Key::KeyR => 0x52,
        Key::KeyS => 0x53,
        Key::KeyT => 0x54,
        Key::KeyU => 0x55,
        Key::KeyV => 0x56,
        Key::KeyW => 0x57,
        Key::KeyX => 0x58,
        Key::KeyY => 0x59,
        Key::KeyZ => 0x5A,

        // Numbers
        Key::Num0 => 0x30,
        Key::Num1 => 0x31,
        Key::Num2 => 0x32,
        Key::Num3 => 0x33,
        Key::Num4 => 0x34,
        Key::Num5 => 0x35,
        Key::Num6 => 0x36,
        Key::Num7 => 0x37,
        Key::Num8 => 0x38,
        Key::Num9 => 0x39,

        // Function keys (VK_F1..VK_F24 are contiguous)
        Key::F1 => 0x70,
        Key::F2 => 0x71,
        Key::F3 => 0x72,
        Key::F4 => 0x73,
        Key::F5 => 0x74,
        Key::F6 => 0x75,
        Key::F7 => 0x76,
        Key::F8 => 0x77,
        Key::F9 => 0x78,
        Key::F10 => 0x79,
        Key::F11 => 0x7A,
        Key::F12 => 0x7B,
        Key::F13 => 0x7C,
        Key::F14 => 0x7D,
        Key::F15 => 0x7E,
        Key::F16 => 0x7F,
        Key::F17 => 0x80,
        Key::F18 => 0x81,
        Key::F19 => 0x82,
        Key::F20 => 0x83,
        Key::F21 => 0x84,
        Key::F22 => 0x85,
        Key::F23 => 0x86,
        Key::F24 => 0x87,

        // Modifiers
        Key::ShiftLeft => 0xA0,
        Key::ShiftRight => 0xA1,
        Key::ControlLeft => 0xA2,
        Key::ControlRight => 0xA3,
        Key::AltLeft => 0xA4,
        Key::AltRight => 0xA5,
        Key::MetaLeft => 0x5B,
        Key::MetaRight => 0x5C,

        // Navigation and special
        Key::Escape => 0x1B,
        Key::Tab => 0x09,
        Key::CapsLock => 0x14,
        Key::Space => 0x20,
        Key::Enter => 0x0D,
        Key::Backspace => 0x08,
        Key::Insert => 0x2D,
        Key::Delete => 0x2E,
        Key::Home => 0x24,
        Key::End => 0x23,
        Key::PageUp => 0x21,
        Key::PageDown => 0x22,
        Key::ArrowUp => 0x26,
        Key::ArrowDown => 0x28,
        Key::ArrowLeft => 0x25,
        Key::ArrowRight => 0x27,

        // Lock keys
        Key::NumLock => 0x90,
        Key::ScrollLock => 0x91,
        Key::PrintScreen => 0x2C,
        Key::Pause => 0x13,

        // Punctuation (US layout OEM keys)
        Key::Grave => 0xC0,
        Key::Minus => 0xBD,
        Key::Equal => 0xBB,
        Key::BracketLeft => 0xDB,
        Key::BracketRight => 0xDD,
        Key::Backslash => 0xDC,
        Key::Semicolon => 0xBA,
        Key::Quote => 0xDE,
        Key::Comma => 0xBC,
        Key::Period => 0xBE,
        Key::Slash => 0xBF,

        // Numpad
        Key::Numpad0 => 0x60,
        Key::Numpad1 => 0x61,
        Key::Numpad2 => 0x62,
        Key::Numpad3 => 0x63,
        Key::Numpad4 => 0x64,
        Key::Numpad5 => 0x65,
        Key::Numpad6 => 0x66,
        Key::Numpad7 => 0x67,
        Key::Numpad8 => 0x68,
        Key::Numpad9 => 0x69,
        Key::NumpadMultiply => 0x6A,
        Key::NumpadAdd => 0x6B,
        Key::NumpadSubtract => 0x6D,
        Key::NumpadDecimal => 0x6E,
        Key::NumpadDivide => 0x6F,
        // VK_RETURN, distinguished from Enter by the extended flag
        Key::NumpadEnter => 0x0D,

        // Media keys
        Key::VolumeMute => 0xAD,
        Key::VolumeDown => 0xAE,
        Key::VolumeUp => 0xAF,
        Key::MediaNext => 0xB0,
        Key::MediaPrevious => 0xB1,
        Key::MediaStop => 0xB2,
        Key::MediaPlayPause => 0xB3,

        // Browser keys
        Key::BrowserBack => 0xA6,
        Key::BrowserForward => 0xA7,
        Key::BrowserRefresh => 0xA8,
        Key::BrowserStop => 0xA9,
        Key::BrowserSearch => 0xAA,
        Key::BrowserFavorites => 0xAB,
        Key::BrowserHome => 0xAC,

        // Application keys
        Key::LaunchMail => 0xB4,
        Key::LaunchApp1 => 0xB6,
        Key::LaunchApp2 => 0xB7,

        // International
        Key::IntlBackslash => 0xE2,
        Key::IntlRo => 0xC1,

        Key::ContextMenu => 0x5D,

        Key::NumpadEqual | Key::IntlYen => return None,
    })
}

/// Whether the key must be sent with `KEYEVENTF_EXTENDEDKEY`.
pub fn is_extended(key: Key) -> bool {
    matches!(
        key,
        Key::ControlRight
            | Key::AltRight
            | Key::MetaLeft
            | Key::MetaRight
            | Key::Insert
            | Key::Delete
            | Key::Home
            | Key::End
            | Key::PageUp
            | Key::PageDown
            | Key::ArrowUp
            | Key::ArrowDown
            | Key::ArrowLeft
            | Key::ArrowRight
            | Key::NumLock
            | Key::PrintScreen
            | Key::NumpadDivide
            | Key::NumpadEnter
            | Key::ContextMenu
            | Key::VolumeUp
            | Key::VolumeDown
            | Key::VolumeMute
            | Key::MediaPlayPause
            | Key::MediaStop
            | Key::MediaNext
            | Key::MediaPrevious
            | Key::BrowserBack
            | Key::BrowserForward
            | Key::BrowserRefresh
            | Key::BrowserStop
            | Key::BrowserSearch
            | Key::BrowserFavorites
            | Key::BrowserHome
            | Key::LaunchMail
            | Key::LaunchApp1
            | Key::LaunchApp2
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unmapped_keys() {
        let missing: Vec<Key> = Key::all().filter(|k| key_to_keycode(*k).is_none()).collect();
        assert_eq!(missing, vec![Key::NumpadEqual, Key::IntlYen]);
    }

    #[test]
    fn test_vk_and_extended_flag_identify_the_key() {
        let pairs: Vec<(u16, bool)> = Key::all()
            .filter_map(|k| key_to_keycode(k).map(|vk| (vk, is_extended(k))))
            .collect();
        let unique: HashSet<(u16, bool)> = pairs.iter().copied().collect();
        assert_eq!(pairs.len(), unique.len());
    }

    #[test]
    fn test_enter_variants() {
        assert_eq!(key_to_keycode(Key::Enter), key_to_keycode(Key::NumpadEnter));
        assert!(!is_extended(Key::Enter));
        assert!(is_extended(Key::NumpadEnter));
    }
}
