//! Linux evdev key mapping
//!
//! Static neutral-key → evdev code table. Unlike the Windows mapper there is
//! no layout probe: evdev codes identify physical key positions, and the
//! compositor/xkb layer above us applies the user's layout.

use std::collections::HashMap;

use evdev::Key as EvKey;

use crate::key::Key;

/// Neutral key → evdev code pairs.
const TABLE: &[(Key, EvKey)] = &[
    // Letters
    (Key::A, EvKey::KEY_A),
    (Key::B, EvKey::KEY_B),
    (Key::C, EvKey::KEY_C),
    (Key::D, EvKey::KEY_D),
    (Key::E, EvKey::KEY_E),
    (Key::F, EvKey::KEY_F),
    (Key::G, EvKey::KEY_G),
    (Key::H, EvKey::KEY_H),
    (Key::I, EvKey::KEY_I),
    (Key::J, EvKey::KEY_J),
    (Key::K, EvKey::KEY_K),
    (Key::L, EvKey::KEY_L),
    (Key::M, EvKey::KEY_M),
    (Key::N, EvKey::KEY_N),
    (Key::O, EvKey::KEY_O),
    (Key::P, EvKey::KEY_P),
    (Key::Q, EvKey::KEY_Q),
    (Key::R, EvKey::KEY_R),
    (Key::S, EvKey::KEY_S),
    (Key::T, EvKey::KEY_T),
    (Key::U, EvKey::KEY_U),
    (Key::V, EvKey::KEY_V),
    (Key::W, EvKey::KEY_W),
    (Key::X, EvKey::KEY_X),
    (Key::Y, EvKey::KEY_Y),
    (Key::Z, EvKey::KEY_Z),
    // Numbers (top row)
    (Key::Num0, EvKey::KEY_0),
    (Key::Num1, EvKey::KEY_1),
    (Key::Num2, EvKey::KEY_2),
    (Key::Num3, EvKey::KEY_3),
    (Key::Num4, EvKey::KEY_4),
    (Key::Num5, EvKey::KEY_5),
    (Key::Num6, EvKey::KEY_6),
    (Key::Num7, EvKey::KEY_7),
    (Key::Num8, EvKey::KEY_8),
    (Key::Num9, EvKey::KEY_9),
    // Function keys
    (Key::F1, EvKey::KEY_F1),
    (Key::F2, EvKey::KEY_F2),
    (Key::F3, EvKey::KEY_F3),
    (Key::F4, EvKey::KEY_F4),
    (Key::F5, EvKey::KEY_F5),
    (Key::F6, EvKey::KEY_F6),
    (Key::F7, EvKey::KEY_F7),
    (Key::F8, EvKey::KEY_F8),
    (Key::F9, EvKey::KEY_F9),
    (Key::F10, EvKey::KEY_F10),
    (Key::F11, EvKey::KEY_F11),
    (Key::F12, EvKey::KEY_F12),
    (Key::F13, EvKey::KEY_F13),
    (Key::F14, EvKey::KEY_F14),
    (Key::F15, EvKey::KEY_F15),
    (Key::F16, EvKey::KEY_F16),
    (Key::F17, EvKey::KEY_F17),
    (Key::F18, EvKey::KEY_F18),
    (Key::F19, EvKey::KEY_F19),
    (Key::F20, EvKey::KEY_F20),
    // Control
    (Key::Enter, EvKey::KEY_ENTER),
    (Key::Escape, EvKey::KEY_ESC),
    (Key::Backspace, EvKey::KEY_BACKSPACE),
    (Key::Tab, EvKey::KEY_TAB),
    (Key::Space, EvKey::KEY_SPACE),
    // Navigation
    (Key::Left, EvKey::KEY_LEFT),
    (Key::Right, EvKey::KEY_RIGHT),
    (Key::Up, EvKey::KEY_UP),
    (Key::Down, EvKey::KEY_DOWN),
    (Key::Home, EvKey::KEY_HOME),
    (Key::End, EvKey::KEY_END),
    (Key::PageUp, EvKey::KEY_PAGEUP),
    (Key::PageDown, EvKey::KEY_PAGEDOWN),
    (Key::Delete, EvKey::KEY_DELETE),
    (Key::Insert, EvKey::KEY_INSERT),
    (Key::PrintScreen, EvKey::KEY_SYSRQ),
    (Key::ScrollLock, EvKey::KEY_SCROLLLOCK),
    (Key::Pause, EvKey::KEY_PAUSE),
    // Numpad
    (Key::Numpad0, EvKey::KEY_KP0),
    (Key::Numpad1, EvKey::KEY_KP1),
    (Key::Numpad2, EvKey::KEY_KP2),
    (Key::Numpad3, EvKey::KEY_KP3),
    (Key::Numpad4, EvKey::KEY_KP4),
    (Key::Numpad5, EvKey::KEY_KP5),
    (Key::Numpad6, EvKey::KEY_KP6),
    (Key::Numpad7, EvKey::KEY_KP7),
    (Key::Numpad8, EvKey::KEY_KP8),
    (Key::Numpad9, EvKey::KEY_KP9),
    (Key::NumpadDivide, EvKey::KEY_KPSLASH),
    (Key::NumpadMultiply, EvKey::KEY_KPASTERISK),
    (Key::NumpadMinus, EvKey::KEY_KPMINUS),
    (Key::NumpadPlus, EvKey::KEY_KPPLUS),
    (Key::NumpadEnter, EvKey::KEY_KPENTER),
    (Key::NumpadDecimal, EvKey::KEY_KPDOT),
    // Modifiers
    (Key::ShiftLeft, EvKey::KEY_LEFTSHIFT),
    (Key::ShiftRight, EvKey::KEY_RIGHTSHIFT),
    (Key::CtrlLeft, EvKey::KEY_LEFTCTRL),
    (Key::CtrlRight, EvKey::KEY_RIGHTCTRL),
    (Key::AltLeft, EvKey::KEY_LEFTALT),
    (Key::AltRight, EvKey::KEY_RIGHTALT),
    (Key::SuperLeft, EvKey::KEY_LEFTMETA),
    (Key::SuperRight, EvKey::KEY_RIGHTMETA),
    (Key::CapsLock, EvKey::KEY_CAPSLOCK),
    (Key::NumLock, EvKey::KEY_NUMLOCK),
    // Misc
    (Key::Help, EvKey::KEY_HELP),
    (Key::Menu, EvKey::KEY_MENU),
    (Key::Power, EvKey::KEY_POWER),
    (Key::Sleep, EvKey::KEY_SLEEP),
    (Key::Wake, EvKey::KEY_WAKEUP),
    (Key::Mute, EvKey::KEY_MUTE),
    (Key::VolumeDown, EvKey::KEY_VOLUMEDOWN),
    (Key::VolumeUp, EvKey::KEY_VOLUMEUP),
    (Key::MediaPlayPause, EvKey::KEY_PLAYPAUSE),
    (Key::MediaStop, EvKey::KEY_STOPCD),
    (Key::MediaNext, EvKey::KEY_NEXTSONG),
    (Key::MediaPrevious, EvKey::KEY_PREVIOUSSONG),
    (Key::BrightnessDown, EvKey::KEY_BRIGHTNESSDOWN),
    (Key::BrightnessUp, EvKey::KEY_BRIGHTNESSUP),
    (Key::Eject, EvKey::KEY_EJECTCD),
    // Punctuation / layout-dependent
    (Key::Grave, EvKey::KEY_GRAVE),
    (Key::Minus, EvKey::KEY_MINUS),
    (Key::Equal, EvKey::KEY_EQUAL),
    (Key::LeftBracket, EvKey::KEY_LEFTBRACE),
    (Key::RightBracket, EvKey::KEY_RIGHTBRACE),
    (Key::Backslash, EvKey::KEY_BACKSLASH),
    (Key::Semicolon, EvKey::KEY_SEMICOLON),
    (Key::Apostrophe, EvKey::KEY_APOSTROPHE),
    (Key::Comma, EvKey::KEY_COMMA),
    (Key::Period, EvKey::KEY_DOT),
    (Key::Slash, EvKey::KEY_SLASH),
];

/// Immutable per-instance lookup built once at backend construction.
pub struct KeyMap {
    table: HashMap<Key, EvKey>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            table: TABLE.iter().copied().collect(),
        }
    }

    /// Native evdev code for `key`, or `None` when unmapped.
    pub fn native(&self, key: Key) -> Option<EvKey> {
        self.table.get(&key).copied()
    }

    /// All evdev codes this map can emit (used to register the virtual
    /// device's key capabilities).
    pub fn codes(&self) -> impl Iterator<Item = EvKey> + '_ {
        self.table.values().copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let map = KeyMap::new();
        assert_eq!(map.native(Key::A), Some(EvKey::KEY_A));
        assert_eq!(map.native(Key::Enter), Some(EvKey::KEY_ENTER));
        assert_eq!(map.native(Key::ShiftLeft), Some(EvKey::KEY_LEFTSHIFT));
        assert_eq!(map.native(Key::NumpadEnter), Some(EvKey::KEY_KPENTER));
        assert_eq!(map.native(Key::Grave), Some(EvKey::KEY_GRAVE));
    }

    #[test]
    fn test_unknown_is_unmapped() {
        let map = KeyMap::new();
        assert_eq!(map.native(Key::Unknown), None);
    }

    #[test]
    fn test_every_real_key_is_mapped() {
        let map = KeyMap::new();
        for &key in Key::ALL {
            if key == Key::Unknown {
                continue;
            }
            assert!(map.native(key).is_some(), "unmapped: {:?}", key);
        }
    }

    #[test]
    fn test_one_native_code_per_key() {
        // The source table must not assign two codes to one key
        let map = KeyMap::new();
        assert_eq!(map.table.len(), TABLE.len());
    }
}
