//! InputBackend facade and the raw emitter seam
//!
//! The facade owns one platform emitter, the tracked active-modifier
//! bitmask, and the inter-event delay. It is strictly synchronous: every
//! operation blocks for the duration of the underlying OS call, and the only
//! suspension is the pacing sleep inside `tap`/`combo`, which cannot be
//! interrupted once started.
//!
//! Failure policy: nothing here retries and nothing panics. Emitter errors
//! are logged and flattened to a `false` return; the caller decides whether
//! to retry, surface the failure, or re-request permissions.
//!
//! Modifier tracking reflects only what this instance has injected. It never
//! reads the OS-wide keyboard state, so a Shift held on the physical
//! keyboard is invisible to [`InputBackend::active_modifiers`].

#[cfg(target_os = "linux")]
mod uinput;

#[cfg(target_os = "windows")]
mod sendinput;

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
mod unsupported;

use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::caps::{BackendKind, Capabilities};
use crate::error::EmitError;
use crate::key::{Key, KeyStroke, Modifier, MODIFIER_ORDER};
use crate::options::Options;
use crate::text;

/// The raw platform write, one implementation per target OS.
///
/// Emitters map a neutral key to its native code and perform exactly one OS
/// interaction per call; all sequencing (pairs, chords, pacing) lives in the
/// facade so it is identical on every platform.
pub(crate) trait RawEmitter: Send {
    fn kind(&self) -> BackendKind;

    fn capabilities(&self) -> Capabilities;

    fn is_ready(&self) -> bool;

    fn request_permissions(&mut self) -> bool;

    /// Assert (`down = true`) or deassert a single key.
    fn emit_key(&mut self, key: Key, down: bool) -> Result<(), EmitError>;

    /// Inject literal UTF-16 units as one batch, each unit a down+up pair
    /// tagged as a raw unicode event rather than a physical key.
    fn emit_text(&mut self, units: &[u16]) -> Result<(), EmitError>;

    /// Push any buffered events to the OS.
    fn flush(&mut self);
}

/// Uniform keyboard-injection interface over the platform backends.
///
/// Construction never fails: when the platform resource cannot be acquired
/// the instance simply reports `is_ready() == false` and every injection
/// returns `false`.
pub struct InputBackend {
    emitter: Box<dyn RawEmitter>,
    /// Snapshot taken at construction; platform capability is static.
    caps: Capabilities,
    /// Modifiers currently held by our own injected events.
    active_mods: Modifier,
    /// Pacing between down/up transitions in `tap`/`combo`.
    key_delay: Duration,
    /// Per-event tracing (SOFTBOARD_DEBUG).
    trace: bool,
}

impl InputBackend {
    /// Platform default backend, configured from the environment.
    pub fn new() -> Self {
        Self::with_options(Options::from_env())
    }

    /// Platform default backend with explicit options.
    pub fn with_options(options: Options) -> Self {
        Self::from_emitter(platform_emitter(&options), &options)
    }

    pub(crate) fn from_emitter(emitter: Box<dyn RawEmitter>, options: &Options) -> Self {
        let caps = emitter.capabilities();
        info!(
            "input backend {:?}: ready={} keys={} text={}",
            emitter.kind(),
            emitter.is_ready(),
            caps.can_inject_keys,
            caps.can_inject_text
        );
        Self {
            emitter,
            caps,
            active_mods: Modifier::empty(),
            key_delay: options.key_delay,
            trace: options.trace,
        }
    }

    /// Which platform variant backs this instance.
    pub fn kind(&self) -> BackendKind {
        self.emitter.kind()
    }

    /// Capability snapshot taken at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Whether injection can currently be performed.
    pub fn is_ready(&self) -> bool {
        self.emitter.is_ready()
    }

    /// Trigger the platform permission flow where one exists; where no
    /// runtime-requestable permission exists this degrades to re-checking
    /// readiness.
    pub fn request_permissions(&mut self) -> bool {
        self.emitter.request_permissions()
    }

    /// Modifiers currently held by our own injected events (not the OS-wide
    /// state).
    pub fn active_modifiers(&self) -> Modifier {
        self.active_mods
    }

    /// Delay inserted between down/up transitions, in microseconds. Some
    /// applications drop events sent with zero spacing, so this is a
    /// correctness knob rather than cosmetics.
    pub fn set_key_delay(&mut self, delay_us: u64) {
        self.key_delay = Duration::from_micros(delay_us);
    }

    /// Press a key. The key stays down until [`InputBackend::key_up`]; the
    /// OS generates auto-repeat on its own where supported. Pressing an
    /// already-down key re-sends the native down event.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.send_key(key, true)
    }

    /// Release a key.
    pub fn key_up(&mut self, key: Key) -> bool {
        self.send_key(key, false)
    }

    /// Press and release with the configured delay in between. A down that
    /// was sent is not rolled back when the up fails; the caller must issue
    /// `key_up` itself to leave the Down state.
    pub fn tap(&mut self, key: Key) -> bool {
        if !self.key_down(key) {
            return false;
        }
        self.pace();
        self.key_up(key)
    }

    /// Press every modifier in `mods` (left-side keys, fixed order: Shift,
    /// Ctrl, Alt, Super, then the locks). Already-tracked modifiers are
    /// re-pressed; OS auto-repeat of a held key is harmless and the policy
    /// stays uniform across platforms.
    pub fn hold_modifier(&mut self, mods: Modifier) -> bool {
        let mut ok = true;
        for &(bit, key) in MODIFIER_ORDER {
            if mods.contains(bit) {
                ok &= self.key_down(key);
            }
        }
        ok
    }

    /// Release every modifier in `mods`, same fixed order as
    /// [`InputBackend::hold_modifier`].
    pub fn release_modifier(&mut self, mods: Modifier) -> bool {
        let mut ok = true;
        for &(bit, key) in MODIFIER_ORDER {
            if mods.contains(bit) {
                ok &= self.key_up(key);
            }
        }
        ok
    }

    /// Release everything currently tracked as held.
    pub fn release_all_modifiers(&mut self) -> bool {
        let held = self.active_mods;
        self.release_modifier(held)
    }

    /// Modifier chord: hold `mods`, tap `key`, release `mods`. Modifier
    /// downs are emitted strictly before the key's down, ups strictly after
    /// its up; some applications (OS-global shortcuts) depend on that order.
    pub fn combo(&mut self, mods: Modifier, key: Key) -> bool {
        if !self.hold_modifier(mods) {
            // Do not leave a partial chord held
            self.release_modifier(mods);
            return false;
        }
        self.pace();
        let tapped = self.tap(key);
        self.pace();
        let released = self.release_modifier(mods);
        tapped && released
    }

    /// Inject literal text, bypassing the physical-key pipeline. Decoding is
    /// best-effort (malformed input is skipped, never an error). Backends
    /// without a native text facility return `false` without touching any
    /// state. A `false` from a batch-capable backend may mean the OS
    /// accepted a prefix of the events; there is no rollback.
    pub fn type_text(&mut self, text: &str) -> bool {
        self.type_units(&text::utf8_to_utf16(text.as_bytes()))
    }

    /// As [`InputBackend::type_text`], from UTF-32 codepoints.
    pub fn type_codepoints(&mut self, codepoints: &[u32]) -> bool {
        self.type_units(&text::encode_utf16(codepoints))
    }

    /// Inject a single character.
    pub fn type_character(&mut self, ch: char) -> bool {
        self.type_codepoints(&[ch as u32])
    }

    /// Stroke entry points used by key widgets: a text stroke routes to
    /// [`InputBackend::type_text`], a physical stroke holds its modifiers
    /// around the key event.
    pub fn key_down_stroke(&mut self, stroke: &KeyStroke) -> bool {
        if let Some(text) = stroke_text(stroke) {
            return self.type_text(text);
        }
        self.hold_modifier(stroke.mods) && self.key_down(stroke.key)
    }

    /// Mirror of [`InputBackend::key_down_stroke`]. Releasing a text stroke
    /// has nothing left to send and reports success.
    pub fn key_up_stroke(&mut self, stroke: &KeyStroke) -> bool {
        if stroke_text(stroke).is_some() {
            return true;
        }
        let up = self.key_up(stroke.key);
        self.release_modifier(stroke.mods) && up
    }

    /// Tap a stroke: text goes through the text pipeline, chords through
    /// [`InputBackend::combo`].
    pub fn tap_stroke(&mut self, stroke: &KeyStroke) -> bool {
        if let Some(text) = stroke_text(stroke) {
            return self.type_text(text);
        }
        if stroke.mods.is_empty() {
            self.tap(stroke.key)
        } else {
            self.combo(stroke.mods, stroke.key)
        }
    }

    /// Force any buffered event batch to the OS. A no-op on backends whose
    /// native call is already synchronous.
    pub fn flush(&mut self) {
        self.emitter.flush();
    }

    fn send_key(&mut self, key: Key, down: bool) -> bool {
        if key == Key::Unknown {
            return false;
        }
        if self.trace {
            debug!("inject: {:?} {}", key, if down { "down" } else { "up" });
        } else {
            trace!("inject: {:?} {}", key, if down { "down" } else { "up" });
        }
        match self.emitter.emit_key(key, down) {
            Ok(()) => {
                if let Some(bit) = key.modifier_bit() {
                    if down {
                        self.active_mods |= bit;
                    } else {
                        self.active_mods &= !bit;
                    }
                }
                true
            }
            Err(e) => {
                warn!("inject {:?} {} failed: {}", key, if down { "down" } else { "up" }, e);
                false
            }
        }
    }

    fn type_units(&mut self, units: &[u16]) -> bool {
        if !self.caps.can_inject_text {
            return false;
        }
        if units.is_empty() {
            return true;
        }
        if self.trace {
            debug!("inject: {} unicode units", units.len());
        } else {
            trace!("inject: {} unicode units", units.len());
        }
        match self.emitter.emit_text(units) {
            Ok(()) => true,
            Err(e) => {
                warn!("text injection failed: {}", e);
                false
            }
        }
    }

    fn pace(&self) {
        if !self.key_delay.is_zero() {
            std::thread::sleep(self.key_delay);
        }
    }
}

impl Default for InputBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn stroke_text(stroke: &KeyStroke) -> Option<&str> {
    stroke.text.as_deref().filter(|t| !t.is_empty())
}

#[allow(unused_variables)]
fn platform_emitter(options: &Options) -> Box<dyn RawEmitter> {
    #[cfg(target_os = "linux")]
    {
        Box::new(uinput::UinputEmitter::open(&options.device_name))
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(sendinput::SendInputEmitter::new())
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Box::new(unsupported::UnsupportedEmitter)
    }
}
