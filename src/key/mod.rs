//! Platform-neutral key and modifier model
//!
//! [`Key`] identifies a physical/logical key independent of OS keycodes;
//! the per-platform mappers in [`crate::map`] translate it to a native code.
//! Discriminant values are an implementation detail and are never persisted
//! or sent over a wire.

mod modifier;
mod stroke;

pub use modifier::Modifier;
pub use stroke::KeyStroke;

pub(crate) use modifier::MODIFIER_ORDER;

/// A physical or logical key, independent of the OS keycode that backs it.
///
/// Not every key exists on every platform: a mapper may legitimately have
/// no native code for e.g. `BrightnessUp`, in which case operations on it
/// report failure instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Unknown,
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    // Numbers (main row)
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
    // Control keys
    Enter,
    Escape,
    Backspace,
    Tab,
    Space,
    // Navigation
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Insert,
    PrintScreen,
    ScrollLock,
    Pause,
    // Numpad
    NumpadDivide,
    NumpadMultiply,
    NumpadMinus,
    NumpadPlus,
    NumpadEnter,
    NumpadDecimal,
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
    // Modifiers
    ShiftLeft,
    ShiftRight,
    CtrlLeft,
    CtrlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,
    CapsLock,
    NumLock,
    // Misc
    Help,
    Menu,
    Power,
    Sleep,
    Wake,
    Mute,
    VolumeDown,
    VolumeUp,
    MediaPlayPause,
    MediaStop,
    MediaNext,
    MediaPrevious,
    BrightnessDown,
    BrightnessUp,
    Eject,
    // Punctuation (layout-dependent position)
    Grave,
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Apostrophe,
    Comma,
    Period,
    Slash,
}

impl Default for Key {
    fn default() -> Self {
        Key::Unknown
    }
}

impl Key {
    /// Every key, including `Unknown`.
    pub const ALL: &'static [Key] = &[
        Key::Unknown,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::F13,
        Key::F14,
        Key::F15,
        Key::F16,
        Key::F17,
        Key::F18,
        Key::F19,
        Key::F20,
        Key::Enter,
        Key::Escape,
        Key::Backspace,
        Key::Tab,
        Key::Space,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Delete,
        Key::Insert,
        Key::PrintScreen,
        Key::ScrollLock,
        Key::Pause,
        Key::NumpadDivide,
        Key::NumpadMultiply,
        Key::NumpadMinus,
        Key::NumpadPlus,
        Key::NumpadEnter,
        Key::NumpadDecimal,
        Key::Numpad0,
        Key::Numpad1,
        Key::Numpad2,
        Key::Numpad3,
        Key::Numpad4,
        Key::Numpad5,
        Key::Numpad6,
        Key::Numpad7,
        Key::Numpad8,
        Key::Numpad9,
        Key::ShiftLeft,
        Key::ShiftRight,
        Key::CtrlLeft,
        Key::CtrlRight,
        Key::AltLeft,
        Key::AltRight,
        Key::SuperLeft,
        Key::SuperRight,
        Key::CapsLock,
        Key::NumLock,
        Key::Help,
        Key::Menu,
        Key::Power,
        Key::Sleep,
        Key::Wake,
        Key::Mute,
        Key::VolumeDown,
        Key::VolumeUp,
        Key::MediaPlayPause,
        Key::MediaStop,
        Key::MediaNext,
        Key::MediaPrevious,
        Key::BrightnessDown,
        Key::BrightnessUp,
        Key::Eject,
        Key::Grave,
        Key::Minus,
        Key::Equal,
        Key::LeftBracket,
        Key::RightBracket,
        Key::Backslash,
        Key::Semicolon,
        Key::Apostrophe,
        Key::Comma,
        Key::Period,
        Key::Slash,
    ];

    /// The modifier bit this key contributes while held, if it is a
    /// modifier key. Left and right variants map to the same bit.
    pub fn modifier_bit(self) -> Option<Modifier> {
        match self {
            Key::ShiftLeft | Key::ShiftRight => Some(Modifier::SHIFT),
            Key::CtrlLeft | Key::CtrlRight => Some(Modifier::CTRL),
            Key::AltLeft | Key::AltRight => Some(Modifier::ALT),
            Key::SuperLeft | Key::SuperRight => Some(Modifier::SUPER),
            Key::CapsLock => Some(Modifier::CAPS_LOCK),
            Key::NumLock => Some(Modifier::NUM_LOCK),
            _ => None,
        }
    }

    /// True for Shift/Ctrl/Alt/Super variants and the lock keys.
    pub fn is_modifier(self) -> bool {
        self.modifier_bit().is_some()
    }

    /// Stable lowercase name, e.g. `"a"`, `"page_up"`, `"shift_left"`.
    pub fn name(self) -> &'static str {
        match self {
            Key::Unknown => "unknown",
            Key::A => "a",
            Key::B => "b",
            Key::C => "c",
            Key::D => "d",
            Key::E => "e",
            Key::F => "f",
            Key::G => "g",
            Key::H => "h",
            Key::I => "i",
            Key::J => "j",
            Key::K => "k",
            Key::L => "l",
            Key::M => "m",
            Key::N => "n",
            Key::O => "o",
            Key::P => "p",
            Key::Q => "q",
            Key::R => "r",
            Key::S => "s",
            Key::T => "t",
            Key::U => "u",
            Key::V => "v",
            Key::W => "w",
            Key::X => "x",
            Key::Y => "y",
            Key::Z => "z",
            Key::Num0 => "0",
            Key::Num1 => "1",
            Key::Num2 => "2",
            Key::Num3 => "3",
            Key::Num4 => "4",
            Key::Num5 => "5",
            Key::Num6 => "6",
            Key::Num7 => "7",
            Key::Num8 => "8",
            Key::Num9 => "9",
            Key::F1 => "f1",
            Key::F2 => "f2",
            Key::F3 => "f3",
            Key::F4 => "f4",
            Key::F5 => "f5",
            Key::F6 => "f6",
            Key::F7 => "f7",
            Key::F8 => "f8",
            Key::F9 => "f9",
            Key::F10 => "f10",
            Key::F11 => "f11",
            Key::F12 => "f12",
            Key::F13 => "f13",
            Key::F14 => "f14",
            Key::F15 => "f15",
            Key::F16 => "f16",
            Key::F17 => "f17",
            Key::F18 => "f18",
            Key::F19 => "f19",
            Key::F20 => "f20",
            Key::Enter => "enter",
            Key::Escape => "escape",
            Key::Backspace => "backspace",
            Key::Tab => "tab",
            Key::Space => "space",
            Key::Left => "left",
            Key::Right => "right",
            Key::Up => "up",
            Key::Down => "down",
            Key::Home => "home",
            Key::End => "end",
            Key::PageUp => "page_up",
            Key::PageDown => "page_down",
            Key::Delete => "delete",
            Key::Insert => "insert",
            Key::PrintScreen => "print_screen",
            Key::ScrollLock => "scroll_lock",
            Key::Pause => "pause",
            Key::NumpadDivide => "numpad_divide",
            Key::NumpadMultiply => "numpad_multiply",
            Key::NumpadMinus => "numpad_minus",
            Key::NumpadPlus => "numpad_plus",
            Key::NumpadEnter => "numpad_enter",
            Key::NumpadDecimal => "numpad_decimal",
            Key::Numpad0 => "numpad_0",
            Key::Numpad1 => "numpad_1",
            Key::Numpad2 => "numpad_2",
            Key::Numpad3 => "numpad_3",
            Key::Numpad4 => "numpad_4",
            Key::Numpad5 => "numpad_5",
            Key::Numpad6 => "numpad_6",
            Key::Numpad7 => "numpad_7",
            Key::Numpad8 => "numpad_8",
            Key::Numpad9 => "numpad_9",
            Key::ShiftLeft => "shift_left",
            Key::ShiftRight => "shift_right",
            Key::CtrlLeft => "ctrl_left",
            Key::CtrlRight => "ctrl_right",
            Key::AltLeft => "alt_left",
            Key::AltRight => "alt_right",
            Key::SuperLeft => "super_left",
            Key::SuperRight => "super_right",
            Key::CapsLock => "caps_lock",
            Key::NumLock => "num_lock",
            Key::Help => "help",
            Key::Menu => "menu",
            Key::Power => "power",
            Key::Sleep => "sleep",
            Key::Wake => "wake",
            Key::Mute => "mute",
            Key::VolumeDown => "volume_down",
            Key::VolumeUp => "volume_up",
            Key::MediaPlayPause => "media_play_pause",
            Key::MediaStop => "media_stop",
            Key::MediaNext => "media_next",
            Key::MediaPrevious => "media_previous",
            Key::BrightnessDown => "brightness_down",
            Key::BrightnessUp => "brightness_up",
            Key::Eject => "eject",
            Key::Grave => "grave",
            Key::Minus => "minus",
            Key::Equal => "equal",
            Key::LeftBracket => "left_bracket",
            Key::RightBracket => "right_bracket",
            Key::Backslash => "backslash",
            Key::Semicolon => "semicolon",
            Key::Apostrophe => "apostrophe",
            Key::Comma => "comma",
            Key::Period => "period",
            Key::Slash => "slash",
        }
    }

    /// Parse a key name produced by [`Key::name`]. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        let lower = name.to_ascii_lowercase();
        Key::ALL.iter().copied().find(|k| k.name() == lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for &key in Key::ALL {
            assert_eq!(Key::from_name(key.name()), Some(key), "{:?}", key);
        }
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Key::from_name("ENTER"), Some(Key::Enter));
        assert_eq!(Key::from_name("Page_Up"), Some(Key::PageUp));
        assert_eq!(Key::from_name("q"), Some(Key::Q));
    }

    #[test]
    fn test_from_name_unrecognized() {
        assert_eq!(Key::from_name("hyper"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in Key::ALL.iter().enumerate() {
            for b in &Key::ALL[i + 1..] {
                assert_ne!(a.name(), b.name(), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(Key::ShiftLeft.modifier_bit(), Some(Modifier::SHIFT));
        assert_eq!(Key::ShiftRight.modifier_bit(), Some(Modifier::SHIFT));
        assert_eq!(Key::SuperRight.modifier_bit(), Some(Modifier::SUPER));
        assert_eq!(Key::CapsLock.modifier_bit(), Some(Modifier::CAPS_LOCK));
        assert_eq!(Key::A.modifier_bit(), None);
        assert!(!Key::Space.is_modifier());
        assert!(Key::NumLock.is_modifier());
    }
}
