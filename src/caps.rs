//! Capability and readiness descriptors

/// Which platform variant backs an [`crate::InputBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// SendInput soft injection.
    Windows,
    /// CGEvent injection (not built on this target).
    MacOs,
    /// uinput virtual HID device.
    LinuxUinput,
    /// Fallback variant that constructs but can never inject.
    Unsupported,
}

/// What a backend can do and which OS permission it depends on.
///
/// Computed once at construction (including whether the privileged device
/// handle opened) and never changes over the backend's lifetime; platform
/// capability is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Physical key events can be injected.
    pub can_inject_keys: bool,
    /// Literal Unicode text can be injected without going through keycodes.
    pub can_inject_text: bool,
    /// Injection happens at the HID driver level (kernel virtual device),
    /// indistinguishable from real hardware.
    pub can_simulate_hid: bool,
    /// The OS auto-repeats a held key without further events from us.
    pub supports_key_repeat: bool,
    /// macOS Accessibility consent is required.
    pub needs_accessibility_perm: bool,
    /// macOS Input Monitoring consent is required.
    pub needs_input_monitoring_perm: bool,
    /// Write access to /dev/uinput is required (udev rule or input group).
    pub needs_uinput_access: bool,
}
