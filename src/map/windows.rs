//! Windows virtual-key mapping with active-layout probing
//!
//! Physical position of punctuation (and in principle any character key)
//! depends on the active keyboard layout, so character keys are resolved by
//! probing the virtual-key space against the live layout instead of trusting
//! a fixed table. Layout-invariant keys (Enter, function keys, modifiers,
//! navigation, numpad, media) come from a static table, which also serves as
//! the fallback for any character the probe leaves unresolved.
//!
//! The map is built once per backend instance; a layout switch after
//! construction is not tracked.

use std::collections::HashMap;

use log::debug;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, MAPVK_VK_TO_CHAR, VIRTUAL_KEY, VK_ADD, VK_APPS, VK_BACK, VK_CAPITAL,
    VK_DECIMAL, VK_DELETE, VK_DIVIDE, VK_DOWN, VK_END, VK_ESCAPE, VK_F1, VK_F10, VK_F11, VK_F12,
    VK_F13, VK_F14, VK_F15, VK_F16, VK_F17, VK_F18, VK_F19, VK_F2, VK_F20, VK_F3, VK_F4, VK_F5,
    VK_F6, VK_F7, VK_F8, VK_F9, VK_HELP, VK_HOME, VK_INSERT, VK_LCONTROL, VK_LEFT, VK_LMENU,
    VK_LSHIFT, VK_LWIN, VK_MEDIA_NEXT_TRACK, VK_MEDIA_PLAY_PAUSE, VK_MEDIA_PREV_TRACK,
    VK_MEDIA_STOP, VK_MULTIPLY, VK_NEXT, VK_NUMLOCK, VK_NUMPAD0, VK_NUMPAD1, VK_NUMPAD2,
    VK_NUMPAD3, VK_NUMPAD4, VK_NUMPAD5, VK_NUMPAD6, VK_NUMPAD7, VK_NUMPAD8, VK_NUMPAD9,
    VK_OEM_1, VK_OEM_2, VK_OEM_3, VK_OEM_4, VK_OEM_5, VK_OEM_6, VK_OEM_7, VK_OEM_COMMA,
    VK_OEM_MINUS, VK_OEM_PERIOD, VK_OEM_PLUS, VK_PAUSE, VK_PRIOR, VK_RCONTROL, VK_RETURN,
    VK_RIGHT, VK_RMENU, VK_RSHIFT, VK_RWIN, VK_SCROLL, VK_SLEEP, VK_SNAPSHOT, VK_SPACE,
    VK_SUBTRACT, VK_TAB, VK_UP, VK_VOLUME_DOWN, VK_VOLUME_MUTE, VK_VOLUME_UP,
};

use crate::key::Key;

/// Keys whose virtual-key code does not depend on the layout, plus the
/// default US-layout codes for character keys (fallback only; the probe
/// wins for characters it resolves).
const INVARIANT: &[(Key, VIRTUAL_KEY)] = &[
    // Control
    (Key::Enter, VK_RETURN),
    (Key::Escape, VK_ESCAPE),
    (Key::Backspace, VK_BACK),
    (Key::Tab, VK_TAB),
    (Key::Space, VK_SPACE),
    // Function keys
    (Key::F1, VK_F1),
    (Key::F2, VK_F2),
    (Key::F3, VK_F3),
    (Key::F4, VK_F4),
    (Key::F5, VK_F5),
    (Key::F6, VK_F6),
    (Key::F7, VK_F7),
    (Key::F8, VK_F8),
    (Key::F9, VK_F9),
    (Key::F10, VK_F10),
    (Key::F11, VK_F11),
    (Key::F12, VK_F12),
    (Key::F13, VK_F13),
    (Key::F14, VK_F14),
    (Key::F15, VK_F15),
    (Key::F16, VK_F16),
    (Key::F17, VK_F17),
    (Key::F18, VK_F18),
    (Key::F19, VK_F19),
    (Key::F20, VK_F20),
    // Navigation
    (Key::Left, VK_LEFT),
    (Key::Right, VK_RIGHT),
    (Key::Up, VK_UP),
    (Key::Down, VK_DOWN),
    (Key::Home, VK_HOME),
    (Key::End, VK_END),
    (Key::PageUp, VK_PRIOR),
    (Key::PageDown, VK_NEXT),
    (Key::Delete, VK_DELETE),
    (Key::Insert, VK_INSERT),
    (Key::PrintScreen, VK_SNAPSHOT),
    (Key::ScrollLock, VK_SCROLL),
    (Key::Pause, VK_PAUSE),
    // Numpad
    (Key::Numpad0, VK_NUMPAD0),
    (Key::Numpad1, VK_NUMPAD1),
    (Key::Numpad2, VK_NUMPAD2),
    (Key::Numpad3, VK_NUMPAD3),
    (Key::Numpad4, VK_NUMPAD4),
    (Key::Numpad5, VK_NUMPAD5),
    (Key::Numpad6, VK_NUMPAD6),
    (Key::Numpad7, VK_NUMPAD7),
    (Key::Numpad8, VK_NUMPAD8),
    (Key::Numpad9, VK_NUMPAD9),
    (Key::NumpadDivide, VK_DIVIDE),
    (Key::NumpadMultiply, VK_MULTIPLY),
    (Key::NumpadMinus, VK_SUBTRACT),
    (Key::NumpadPlus, VK_ADD),
    (Key::NumpadDecimal, VK_DECIMAL),
    // There is no dedicated virtual key for numpad Enter
    (Key::NumpadEnter, VK_RETURN),
    // Modifiers
    (Key::ShiftLeft, VK_LSHIFT),
    (Key::ShiftRight, VK_RSHIFT),
    (Key::CtrlLeft, VK_LCONTROL),
    (Key::CtrlRight, VK_RCONTROL),
    (Key::AltLeft, VK_LMENU),
    (Key::AltRight, VK_RMENU),
    (Key::SuperLeft, VK_LWIN),
    (Key::SuperRight, VK_RWIN),
    (Key::CapsLock, VK_CAPITAL),
    (Key::NumLock, VK_NUMLOCK),
    // Misc
    (Key::Help, VK_HELP),
    (Key::Menu, VK_APPS),
    (Key::Sleep, VK_SLEEP),
    (Key::Mute, VK_VOLUME_MUTE),
    (Key::VolumeDown, VK_VOLUME_DOWN),
    (Key::VolumeUp, VK_VOLUME_UP),
    (Key::MediaPlayPause, VK_MEDIA_PLAY_PAUSE),
    (Key::MediaStop, VK_MEDIA_STOP),
    (Key::MediaNext, VK_MEDIA_NEXT_TRACK),
    (Key::MediaPrevious, VK_MEDIA_PREV_TRACK),
    // Letters (US fallback)
    (Key::A, VIRTUAL_KEY(0x41)),
    (Key::B, VIRTUAL_KEY(0x42)),
    (Key::C, VIRTUAL_KEY(0x43)),
    (Key::D, VIRTUAL_KEY(0x44)),
    (Key::E, VIRTUAL_KEY(0x45)),
    (Key::F, VIRTUAL_KEY(0x46)),
    (Key::G, VIRTUAL_KEY(0x47)),
    (Key::H, VIRTUAL_KEY(0x48)),
    (Key::I, VIRTUAL_KEY(0x49)),
    (Key::J, VIRTUAL_KEY(0x4A)),
    (Key::K, VIRTUAL_KEY(0x4B)),
    (Key::L, VIRTUAL_KEY(0x4C)),
    (Key::M, VIRTUAL_KEY(0x4D)),
    (Key::N, VIRTUAL_KEY(0x4E)),
    (Key::O, VIRTUAL_KEY(0x4F)),
    (Key::P, VIRTUAL_KEY(0x50)),
    (Key::Q, VIRTUAL_KEY(0x51)),
    (Key::R, VIRTUAL_KEY(0x52)),
    (Key::S, VIRTUAL_KEY(0x53)),
    (Key::T, VIRTUAL_KEY(0x54)),
    (Key::U, VIRTUAL_KEY(0x55)),
    (Key::V, VIRTUAL_KEY(0x56)),
    (Key::W, VIRTUAL_KEY(0x57)),
    (Key::X, VIRTUAL_KEY(0x58)),
    (Key::Y, VIRTUAL_KEY(0x59)),
    (Key::Z, VIRTUAL_KEY(0x5A)),
    // Digits (US fallback)
    (Key::Num0, VIRTUAL_KEY(0x30)),
    (Key::Num1, VIRTUAL_KEY(0x31)),
    (Key::Num2, VIRTUAL_KEY(0x32)),
    (Key::Num3, VIRTUAL_KEY(0x33)),
    (Key::Num4, VIRTUAL_KEY(0x34)),
    (Key::Num5, VIRTUAL_KEY(0x35)),
    (Key::Num6, VIRTUAL_KEY(0x36)),
    (Key::Num7, VIRTUAL_KEY(0x37)),
    (Key::Num8, VIRTUAL_KEY(0x38)),
    (Key::Num9, VIRTUAL_KEY(0x39)),
    // Punctuation (US fallback)
    (Key::Grave, VK_OEM_3),
    (Key::Minus, VK_OEM_MINUS),
    (Key::Equal, VK_OEM_PLUS),
    (Key::LeftBracket, VK_OEM_4),
    (Key::RightBracket, VK_OEM_6),
    (Key::Backslash, VK_OEM_5),
    (Key::Semicolon, VK_OEM_1),
    (Key::Apostrophe, VK_OEM_7),
    (Key::Comma, VK_OEM_COMMA),
    (Key::Period, VK_OEM_PERIOD),
    (Key::Slash, VK_OEM_2),
];

/// The neutral key a probed character resolves to. Only characters whose
/// position genuinely varies by layout are probed.
fn char_key(ch: char) -> Option<Key> {
    let key = match ch {
        'a' => Key::A,
        'b' => Key::B,
        'c' => Key::C,
        'd' => Key::D,
        'e' => Key::E,
        'f' => Key::F,
        'g' => Key::G,
        'h' => Key::H,
        'i' => Key::I,
        'j' => Key::J,
        'k' => Key::K,
        'l' => Key::L,
        'm' => Key::M,
        'n' => Key::N,
        'o' => Key::O,
        'p' => Key::P,
        'q' => Key::Q,
        'r' => Key::R,
        's' => Key::S,
        't' => Key::T,
        'u' => Key::U,
        'v' => Key::V,
        'w' => Key::W,
        'x' => Key::X,
        'y' => Key::Y,
        'z' => Key::Z,
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        '`' => Key::Grave,
        '-' => Key::Minus,
        '=' => Key::Equal,
        '[' => Key::LeftBracket,
        ']' => Key::RightBracket,
        '\\' => Key::Backslash,
        ';' => Key::Semicolon,
        '\'' => Key::Apostrophe,
        ',' => Key::Comma,
        '.' => Key::Period,
        '/' => Key::Slash,
        _ => return None,
    };
    Some(key)
}

/// Immutable per-instance lookup built once at backend construction.
pub struct VkMap {
    table: HashMap<Key, u16>,
}

impl VkMap {
    /// Probe the active layout and build the lookup table.
    pub fn probe() -> Self {
        let mut table: HashMap<Key, u16> = HashMap::new();

        // Enumerate the virtual-key space and ask the layout which character
        // each code produces. First-found mapping wins when two codes claim
        // the same character.
        for vk in 0x01..=0xFEu16 {
            let raw = unsafe { MapVirtualKeyW(u32::from(vk), MAPVK_VK_TO_CHAR) };
            if raw == 0 {
                continue;
            }
            // Dead keys set the high bit; the character lives in the low word
            let Some(ch) = char::from_u32(raw & 0xFFFF) else {
                continue;
            };
            if let Some(key) = char_key(ch.to_ascii_lowercase()) {
                table.entry(key).or_insert(vk);
            }
        }
        let probed = table.len();

        for &(key, vk) in INVARIANT {
            table.entry(key).or_insert(vk.0);
        }

        debug!(
            "virtual-key map built: {} probed from layout, {} total",
            probed,
            table.len()
        );
        Self { table }
    }

    /// Native virtual-key code for `key`, or `None` when unmapped.
    pub fn native(&self, key: Key) -> Option<u16> {
        self.table.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_resolves_character_keys() {
        let map = VkMap::probe();
        // Letters and digits exist on every layout, one way or another
        assert!(map.native(Key::A).is_some());
        assert!(map.native(Key::Num0).is_some());
        assert!(map.native(Key::Semicolon).is_some());
    }

    #[test]
    fn test_invariant_keys() {
        let map = VkMap::probe();
        assert_eq!(map.native(Key::Enter), Some(VK_RETURN.0));
        assert_eq!(map.native(Key::F5), Some(VK_F5.0));
        assert_eq!(map.native(Key::ShiftLeft), Some(VK_LSHIFT.0));
        assert_eq!(map.native(Key::NumpadEnter), Some(VK_RETURN.0));
    }

    #[test]
    fn test_unmapped_keys() {
        let map = VkMap::probe();
        assert_eq!(map.native(Key::Unknown), None);
        // No virtual key exists for these
        assert_eq!(map.native(Key::BrightnessUp), None);
        assert_eq!(map.native(Key::Eject), None);
    }
}
