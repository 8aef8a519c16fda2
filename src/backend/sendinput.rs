//! Windows SendInput emitter
//!
//! Soft injection through the SendInput API. Physical keys are sent with
//! scan codes resolved from the active layout; literal text rides on
//! `KEYEVENTF_UNICODE`, one down+up pair per UTF-16 unit, submitted as a
//! single batch. SendInput reports how many events the OS accepted, so a
//! short count means a prefix of the batch already reached the focused
//! application; there is nothing to roll back.

use log::warn;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, KEYEVENTF_SCANCODE, KEYEVENTF_UNICODE,
    MAPVK_VK_TO_VSC, VIRTUAL_KEY, VK_APPS, VK_DELETE, VK_DIVIDE, VK_DOWN, VK_END, VK_HOME,
    VK_INSERT, VK_LEFT, VK_LWIN, VK_NEXT, VK_NUMLOCK, VK_PRIOR, VK_RCONTROL, VK_RIGHT, VK_RMENU,
    VK_RWIN, VK_SNAPSHOT, VK_UP,
};

use crate::backend::RawEmitter;
use crate::caps::{BackendKind, Capabilities};
use crate::error::EmitError;
use crate::key::Key;
use crate::map::windows::VkMap;

pub(crate) struct SendInputEmitter {
    map: VkMap,
}

impl SendInputEmitter {
    pub(crate) fn new() -> Self {
        Self {
            map: VkMap::probe(),
        }
    }
}

/// Keys that need KEYEVENTF_EXTENDEDKEY so the OS distinguishes them from
/// their numpad twins.
fn is_extended(vk: u16) -> bool {
    const EXTENDED: &[VIRTUAL_KEY] = &[
        VK_INSERT, VK_DELETE, VK_HOME, VK_END, VK_PRIOR, VK_NEXT, VK_LEFT, VK_RIGHT, VK_UP,
        VK_DOWN, VK_SNAPSHOT, VK_DIVIDE, VK_NUMLOCK, VK_RCONTROL, VK_RMENU, VK_LWIN, VK_RWIN,
        VK_APPS,
    ];
    EXTENDED.iter().any(|v| v.0 == vk)
}

fn keyboard_input(vk: u16, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(vk),
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn send(inputs: &[INPUT]) -> Result<(), EmitError> {
    let accepted = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
    let accepted = accepted as usize;
    if accepted == inputs.len() {
        Ok(())
    } else {
        Err(EmitError::Partial {
            requested: inputs.len(),
            accepted,
        })
    }
}

impl RawEmitter for SendInputEmitter {
    fn kind(&self) -> BackendKind {
        BackendKind::Windows
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            can_inject_keys: true,
            can_inject_text: true,
            // SendInput stays above the HID driver layer
            can_simulate_hid: false,
            supports_key_repeat: true,
            needs_accessibility_perm: false,
            needs_input_monitoring_perm: false,
            needs_uinput_access: false,
        }
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn request_permissions(&mut self) -> bool {
        true
    }

    fn emit_key(&mut self, key: Key, down: bool) -> Result<(), EmitError> {
        let vk = self.map.native(key).ok_or(EmitError::NoMapping(key))?;
        let scan = unsafe { MapVirtualKeyW(u32::from(vk), MAPVK_VK_TO_VSC) } as u16;

        let mut flags = KEYEVENTF_SCANCODE;
        if is_extended(vk) {
            flags |= KEYEVENTF_EXTENDEDKEY;
        }
        if !down {
            flags |= KEYEVENTF_KEYUP;
        }

        send(&[keyboard_input(vk, scan, flags)])
    }

    fn emit_text(&mut self, units: &[u16]) -> Result<(), EmitError> {
        let mut inputs = Vec::with_capacity(units.len() * 2);
        for &unit in units {
            inputs.push(keyboard_input(0, unit, KEYEVENTF_UNICODE));
            inputs.push(keyboard_input(0, unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP));
        }
        if let Err(e) = send(&inputs) {
            warn!("unicode batch rejected: {}", e);
            return Err(e);
        }
        Ok(())
    }

    fn flush(&mut self) {
        // SendInput is synchronous; nothing is buffered on our side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let emitter = SendInputEmitter::new();
        let caps = emitter.capabilities();
        assert!(caps.can_inject_keys);
        assert!(caps.can_inject_text);
        assert!(!caps.can_simulate_hid);
        assert!(!caps.needs_uinput_access);
        assert!(emitter.is_ready());
    }

    #[test]
    fn test_extended_key_set() {
        assert!(is_extended(VK_DELETE.0));
        assert!(is_extended(VK_RMENU.0));
        assert!(!is_extended(0x41)); // 'A'
    }

    #[test]
    fn test_unmapped_key_is_reported() {
        let mut emitter = SendInputEmitter::new();
        assert!(matches!(
            emitter.emit_key(Key::Unknown, true),
            Err(EmitError::NoMapping(Key::Unknown))
        ));
    }
}
