//! Virtual key code definitions.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Platform-independent keyboard keys.
///
/// Left and right modifier variants are distinct keys; each maps to exactly
/// one native code per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Numbers (top row)
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft, // Windows/Command/Super
    MetaRight,

    // Navigation
    Escape,
    Tab,
    CapsLock,
    Space,
    Enter,
    Backspace,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Lock keys
    NumLock,
    ScrollLock,
    PrintScreen,
    Pause,

    // Punctuation and symbols
    Grave,        // ` ~
    Minus,        // - _
    Equal,        // = +
    BracketLeft,  // [ {
    BracketRight, // ] }
    Backslash,    // \ |
    Semicolon,    // ; :
    Quote,        // ' "
    Comma,        // , <
    Period,       // . >
    Slash,        // / ?

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
    NumpadEqual,

    // Media keys
    VolumeUp,
    VolumeDown,
    VolumeMute,
    MediaPlayPause,
    MediaStop,
    MediaNext,
    MediaPrevious,

    // Browser keys
    BrowserBack,
    BrowserForward,
    BrowserRefresh,
    BrowserStop,
    BrowserSearch,
    BrowserFavorites,
    BrowserHome,

    // Application keys
    LaunchMail,
    LaunchApp1,
    LaunchApp2,

    // International / special
    IntlBackslash,
    IntlYen,
    IntlRo,

    // Context menu
    ContextMenu,
}

/// Raw virtual key codes, using the uiohook numbering shared with the hook
/// side of the ecosystem (PC scan codes, `0x0E` prefix for extended keys,
/// `0xE0` prefix for media and browser keys).
///
/// uiohook has no code for `LaunchApp1`; it takes `0xE06B`, the "My
/// Computer" scan code, following the same `0xE0` convention.
/// `LaunchApp2` is uiohook's calculator key.
const RAW_CODES: [(Key, u16); 137] = [
    (Key::KeyA, 0x001E),
    (Key::KeyB, 0x0030),
    (Key::KeyC, 0x002E),
    (Key::KeyD, 0x0020),
    (Key::KeyE, 0x0012),
    (Key::KeyF, 0x0021),
    (Key::KeyG, 0x0022),
    (Key::KeyH, 0x0023),
    (Key::KeyI, 0x0017),
    (Key::KeyJ, 0x0024),
    (Key::KeyK, 0x0025),
    (Key::KeyL, 0x0026),
    (Key::KeyM, 0x0032),
    (Key::KeyN, 0x0031),
    (Key::KeyO, 0x0018),
    (Key::KeyP, 0x0019),
    (Key::KeyQ, 0x0010),
    (Key::KeyR, 0x0013),
    (Key::KeyS, 0x001F),
    (Key::KeyT, 0x0014),
    (Key::KeyU, 0x0016),
    (Key::KeyV, 0x002F),
    (Key::KeyW, 0x0011),
    (Key::KeyX, 0x002D),
    (Key::KeyY, 0x0015),
    (Key::KeyZ, 0x002C),
    (Key::Num0, 0x000B),
    (Key::Num1, 0x0002),
    (Key::Num2, 0x0003),
    (Key::Num3, 0x0004),
    (Key::Num4, 0x0005),
    (Key::Num5, 0x0006),
    (Key::Num6, 0x0007),
    (Key::Num7, 0x0008),
    (Key::Num8, 0x0009),
    (Key::Num9, 0x000A),
    (Key::F1, 0x003B),
    (Key::F2, 0x003C),
    (Key::F3, 0x003D),
    (Key::F4, 0x003E),
    (Key::F5, 0x003F),
    (Key::F6, 0x0040),
    (Key::F7, 0x0041),
    (Key::F8, 0x0042),
    (Key::F9, 0x0043),
    (Key::F10, 0x0044),
    (Key::F11, 0x0057),
    (Key::F12, 0x0058),
    (Key::F13, 0x005B),
    (Key::F14, 0x005C),
    (Key::F15, 0x005D),
    (Key::F16, 0x0063),
    (Key::F17, 0x0064),
    (Key::F18, 0x0065),
    (Key::F19, 0x0066),
    (Key::F20, 0x0067),
    (Key::F21, 0x0068),
    (Key::F22, 0x0069),
    (Key::F23, 0x006A),
    (Key::F24, 0x006B),
    (Key::ShiftLeft, 0x002A),
    (Key::ShiftRight, 0x0036),
    (Key::ControlLeft, 0x001D),
    (Key::ControlRight, 0x0E1D),
    (Key::AltLeft, 0x0038),
    (Key::AltRight, 0x0E38),
    (Key::MetaLeft, 0x0E5B),
    (Key::MetaRight, 0x0E5C),
    (Key::Escape, 0x0001),
    (Key::Tab, 0x000F),
    (Key::CapsLock, 0x003A),
    (Key::Space, 0x0039),
    (Key::Enter, 0x001C),
    (Key::Backspace, 0x000E),
    (Key::Insert, 0x0E52),
    (Key::Delete, 0x0E53),
    (Key::Home, 0x0E47),
    (Key::End, 0x0E4F),
    (Key::PageUp, 0x0E49),
    (Key::PageDown, 0x0E51),
    (Key::ArrowUp, 0xE048),
    (Key::ArrowDown, 0xE050),
    (Key::ArrowLeft, 0xE04B),
    (Key::ArrowRight, 0xE04D),
    (Key::NumLock, 0x0045),
    (Key::ScrollLock, 0x0046),
    (Key::PrintScreen, 0x0E37),
    (Key::Pause, 0x0E45),
    (Key::Grave, 0x0029),
    (Key::Minus, 0x000C),
    (Key::Equal, 0x000D),
    (Key::BracketLeft, 0x001A),
    (Key::BracketRight, 0x001B),
    (Key::Backslash, 0x002B),
    (Key::Semicolon, 0x0027),
    (Key::Quote, 0x0028),
    (Key::Comma, 0x0033),
    (Key::Period, 0x0034),
    (Key::Slash, 0x0035),
    (Key::Numpad0, 0x0052),
    (Key::Numpad1, 0x004F),
    (Key::Numpad2, 0x0050),
    (Key::Numpad3, 0x0051),
    (Key::Numpad4, 0x004B),
    (Key::Numpad5, 0x004C),
    (Key::Numpad6, 0x004D),
    (Key::Numpad7, 0x0047),
    (Key::Numpad8, 0x0048),
    (Key::Numpad9, 0x0049),
    (Key::NumpadAdd, 0x004E),
    (Key::NumpadSubtract, 0x004A),
    (Key::NumpadMultiply, 0x0037),
    (Key::NumpadDivide, 0x0E35),
    (Key::NumpadDecimal, 0x0053),
    (Key::NumpadEnter, 0x0E1C),
    (Key::NumpadEqual, 0x0E0D),
    (Key::VolumeUp, 0xE030),
    (Key::VolumeDown, 0xE02E),
    (Key::VolumeMute, 0xE020),
    (Key::MediaPlayPause, 0xE022),
    (Key::MediaStop, 0xE024),
    (Key::MediaNext, 0xE019),
    (Key::MediaPrevious, 0xE010),
    (Key::BrowserBack, 0xE06A),
    (Key::BrowserForward, 0xE069),
    (Key::BrowserRefresh, 0xE067),
    (Key::BrowserStop, 0xE068),
    (Key::BrowserSearch, 0xE065),
    (Key::BrowserFavorites, 0xE066),
    (Key::BrowserHome, 0xE032),
    (Key::LaunchMail, 0xE06C),
    (Key::LaunchApp1, 0xE06B),
    (Key::LaunchApp2, 0xE021),
    (Key::IntlBackslash, 0x0E46),
    (Key::IntlYen, 0x007D),
    (Key::IntlRo, 0x0073),
    (Key::ContextMenu, 0x0E5D),
];

impl Key {
    /// All keys, in declaration order.
    pub fn all() -> impl Iterator<Item = Key> {
        RAW_CODES.iter().map(|(key, _)| *key)
    }

    /// The raw virtual key code for this key.
    pub fn code(&self) -> u16 {
        RAW_CODES
            .iter()
            .find(|(key, _)| key == self)
            .map(|(_, code)| *code)
            .unwrap_or_default()
    }

    /// Look up a key by its raw virtual key code.
    pub fn from_code(code: u16) -> Result<Key> {
        RAW_CODES
            .iter()
            .find(|(_, raw)| *raw == code)
            .map(|(key, _)| *key)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown key code 0x{code:04X}")))
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Key::ShiftLeft
                | Key::ShiftRight
                | Key::ControlLeft
                | Key::ControlRight
                | Key::AltLeft
                | Key::AltRight
                | Key::MetaLeft
                | Key::MetaRight
        )
    }
}

impl TryFrom<u16> for Key {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        Key::from_code(code)
    }
}

impl From<Key> for u16 {
    fn from(key: Key) -> Self {
        key.code()
    }
}
