//! Linux uinput emitter
//!
//! Registers a virtual keyboard device through /dev/uinput and writes
//! EV_KEY/SYN_REPORT pairs to it. This is true HID simulation: events are
//! indistinguishable from real hardware at the driver level, and the kernel
//! handles key repeat on its own.
//!
//! Opening /dev/uinput needs pre-existing filesystem access (udev rule or
//! membership in the right group); there is no runtime consent dialog to
//! trigger, so a failed open can only be fixed outside the process. Literal
//! Unicode injection is refused outright: synthesizing arbitrary text
//! through keycodes would depend on the active layout, which this device
//! sits below.

use std::thread;
use std::time::Duration;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key as EvKey};
use log::{debug, warn};
use nix::unistd::{access, AccessFlags};

use crate::backend::RawEmitter;
use crate::caps::{BackendKind, Capabilities};
use crate::error::EmitError;
use crate::key::Key;
use crate::map::linux::KeyMap;

const UINPUT_PATH: &str = "/dev/uinput";

/// How long udev gets to create the device node before we start writing.
const DEVICE_SETTLE: Duration = Duration::from_millis(100);

pub(crate) struct UinputEmitter {
    /// `None` when /dev/uinput could not be opened; the emitter then reports
    /// not-ready instead of failing construction.
    device: Option<VirtualDevice>,
    map: KeyMap,
}

impl UinputEmitter {
    pub(crate) fn open(device_name: &str) -> Self {
        let map = KeyMap::new();
        let device = match create_device(device_name, &map) {
            Ok(dev) => {
                debug!("uinput device registered as {:?}", device_name);
                Some(dev)
            }
            Err(e) => {
                warn!("cannot create uinput device: {}", e);
                log_access_hint();
                None
            }
        };
        Self { device, map }
    }
}

fn create_device(name: &str, map: &KeyMap) -> std::io::Result<VirtualDevice> {
    let mut keys = AttributeSet::<EvKey>::new();
    for code in map.codes() {
        keys.insert(code);
    }

    let device = VirtualDeviceBuilder::new()?
        .name(name)
        .with_keys(&keys)?
        .build()?;

    // Give udev time to create the device node; events written before the
    // node exists are dropped by consumers that open it late.
    thread::sleep(DEVICE_SETTLE);

    Ok(device)
}

fn log_access_hint() {
    match access(UINPUT_PATH, AccessFlags::W_OK) {
        Ok(()) => {}
        Err(err) => {
            let uid = unsafe { libc::geteuid() };
            warn!(
                "{} is not writable for uid {} ({}); add a udev rule or join the input group",
                UINPUT_PATH, uid, err
            );
        }
    }
}

impl RawEmitter for UinputEmitter {
    fn kind(&self) -> BackendKind {
        BackendKind::LinuxUinput
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            can_inject_keys: self.device.is_some(),
            can_inject_text: false,
            can_simulate_hid: true,
            supports_key_repeat: true,
            needs_accessibility_perm: false,
            needs_input_monitoring_perm: false,
            needs_uinput_access: true,
        }
    }

    fn is_ready(&self) -> bool {
        self.device.is_some()
    }

    fn request_permissions(&mut self) -> bool {
        // No runtime consent flow exists for uinput; re-check readiness
        self.is_ready()
    }

    fn emit_key(&mut self, key: Key, down: bool) -> Result<(), EmitError> {
        let device = self.device.as_mut().ok_or(EmitError::NotReady)?;
        let code = self.map.native(key).ok_or(EmitError::NoMapping(key))?;

        let events = [
            InputEvent::new(EventType::KEY, code.code(), i32::from(down)),
            InputEvent::new(EventType::SYNCHRONIZATION, 0, 0),
        ];
        device.emit(&events)?;
        Ok(())
    }

    fn emit_text(&mut self, _units: &[u16]) -> Result<(), EmitError> {
        Err(EmitError::Unsupported)
    }

    fn flush(&mut self) {
        if let Some(device) = self.device.as_mut() {
            let syn = [InputEvent::new(EventType::SYNCHRONIZATION, 0, 0)];
            if let Err(e) = device.emit(&syn) {
                warn!("uinput flush failed: {}", e);
            }
        }
    }
}

// The virtual device is destroyed and the fd closed when `VirtualDevice`
// drops, so a half-initialized emitter needs no cleanup of its own.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_are_static_apart_from_readiness() {
        // Device creation needs real /dev/uinput access and may fail in
        // containers; both outcomes must be coherent.
        let emitter = UinputEmitter::open("softboard test keyboard");
        let caps = emitter.capabilities();

        assert!(caps.needs_uinput_access);
        assert!(caps.can_simulate_hid);
        assert!(!caps.can_inject_text);
        assert!(!caps.needs_accessibility_perm);
        assert_eq!(caps.can_inject_keys, emitter.is_ready());
    }

    #[test]
    fn test_text_is_always_refused() {
        let mut emitter = UinputEmitter::open("softboard test keyboard");
        assert!(matches!(
            emitter.emit_text(&[0x41]),
            Err(EmitError::Unsupported)
        ));
    }

    #[test]
    fn test_key_events_when_device_available() {
        let mut emitter = UinputEmitter::open("softboard test keyboard");
        if !emitter.is_ready() {
            // No /dev/uinput access in this environment; the not-ready path
            // must still answer cleanly.
            assert!(matches!(
                emitter.emit_key(Key::A, true),
                Err(EmitError::NotReady)
            ));
            assert!(!emitter.request_permissions());
            return;
        }

        emitter.emit_key(Key::A, true).expect("key down");
        emitter.emit_key(Key::A, false).expect("key up");
        emitter.flush();
        assert!(emitter.request_permissions());
    }
}
