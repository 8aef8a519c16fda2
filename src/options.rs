//! Backend construction options
//!
//! Process-wide environment configuration is read once, here, into an
//! explicit struct that travels with the backend instance; nothing in the
//! crate consults the environment after construction.
//!
//! Recognized variables:
//! - `SOFTBOARD_DEBUG`: `1`/`true`/`yes`/`on` enables per-event tracing
//! - `SOFTBOARD_KEY_DELAY_US`: initial inter-event delay in microseconds
//! - `SOFTBOARD_DEVICE_NAME`: name of the Linux virtual device

use std::time::Duration;

use log::warn;

/// Default inter-event delay. Zero-gap injection makes some applications
/// drop events, so pacing defaults on.
pub const DEFAULT_KEY_DELAY_US: u64 = 1_000;

/// Default name the virtual device registers under on Linux.
pub const DEFAULT_DEVICE_NAME: &str = "Softboard Virtual Keyboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Virtual device name (Linux uinput only).
    pub device_name: String,
    /// Initial delay between down/up transitions in `tap`/`combo`.
    pub key_delay: Duration,
    /// Verbose tracing of every injected event.
    pub trace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            key_delay: Duration::from_micros(DEFAULT_KEY_DELAY_US),
            trace: false,
        }
    }
}

impl Options {
    /// Defaults overridden by the `SOFTBOARD_*` environment variables.
    pub fn from_env() -> Self {
        let mut opts = Self::default();

        if let Ok(v) = std::env::var("SOFTBOARD_DEBUG") {
            opts.trace = matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "on");
        }

        if let Ok(v) = std::env::var("SOFTBOARD_KEY_DELAY_US") {
            match v.parse::<u64>() {
                Ok(us) => opts.key_delay = Duration::from_micros(us),
                Err(_) => warn!("SOFTBOARD_KEY_DELAY_US is not a number: {:?}", v),
            }
        }

        if let Ok(v) = std::env::var("SOFTBOARD_DEVICE_NAME") {
            if !v.is_empty() {
                opts.device_name = v;
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.key_delay, Duration::from_micros(DEFAULT_KEY_DELAY_US));
        assert_eq!(opts.device_name, DEFAULT_DEVICE_NAME);
        assert!(!opts.trace);
    }
}
