//! KeyStroke: one stroke is either a physical chord or a literal text insert

use super::{Key, Modifier};

/// A single stroke as produced by a key widget: either a physical key with
/// optional modifiers, or a direct character payload that bypasses the
/// physical-key pipeline entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyStroke {
    pub key: Key,
    pub mods: Modifier,
    /// Literal text to inject instead of a physical key event. When set,
    /// `key` and `mods` are ignored.
    pub text: Option<String>,
}

impl KeyStroke {
    /// A plain key stroke without modifiers.
    pub fn key(key: Key) -> Self {
        Self {
            key,
            mods: Modifier::empty(),
            text: None,
        }
    }

    /// A key stroke with modifiers held around it.
    pub fn chord(key: Key, mods: Modifier) -> Self {
        Self {
            key,
            mods,
            text: None,
        }
    }

    /// A literal text stroke.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: Key::Unknown,
            mods: Modifier::empty(),
            text: Some(text.into()),
        }
    }

    /// True when this stroke carries a text payload.
    pub fn is_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_shapes() {
        let plain = KeyStroke::key(Key::Enter);
        assert_eq!(plain.key, Key::Enter);
        assert!(!plain.is_text());

        let chord = KeyStroke::chord(Key::S, Modifier::CTRL | Modifier::SHIFT);
        assert!(chord.mods.contains(Modifier::CTRL));

        let text = KeyStroke::text("é");
        assert!(text.is_text());
        assert_eq!(text.key, Key::Unknown);

        // An empty payload behaves like no payload
        let empty = KeyStroke::text("");
        assert!(!empty.is_text());
    }
}
