//! Modifier bitmask

use bitflags::bitflags;

use super::Key;

bitflags! {
    /// Active-modifier bitmask. Compose with `|`, test with `contains`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifier: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
    }
}

/// Fixed press/release order for modifier chords, and the left-side physical
/// key used for each bit. Some applications are sensitive to modifier
/// ordering (OS-global shortcuts in particular), so this order is part of
/// the contract.
pub(crate) const MODIFIER_ORDER: &[(Modifier, Key)] = &[
    (Modifier::SHIFT, Key::ShiftLeft),
    (Modifier::CTRL, Key::CtrlLeft),
    (Modifier::ALT, Key::AltLeft),
    (Modifier::SUPER, Key::SuperLeft),
    (Modifier::CAPS_LOCK, Key::CapsLock),
    (Modifier::NUM_LOCK, Key::NumLock),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_and_test() {
        let mods = Modifier::SHIFT | Modifier::CTRL;
        assert!(mods.contains(Modifier::SHIFT));
        assert!(mods.contains(Modifier::CTRL));
        assert!(!mods.contains(Modifier::ALT));
        assert!(mods.intersects(Modifier::CTRL | Modifier::SUPER));
    }

    #[test]
    fn test_order_covers_all_bits() {
        let mut all = Modifier::empty();
        for &(bit, key) in MODIFIER_ORDER {
            assert_eq!(key.modifier_bit(), Some(bit));
            all |= bit;
        }
        assert_eq!(all, Modifier::all());
    }

    #[test]
    fn test_order_starts_with_shift_ctrl_alt_super() {
        let bits: Vec<Modifier> = MODIFIER_ORDER.iter().map(|&(b, _)| b).collect();
        assert_eq!(
            &bits[..4],
            &[Modifier::SHIFT, Modifier::CTRL, Modifier::ALT, Modifier::SUPER]
        );
    }
}
