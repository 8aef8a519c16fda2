//! Fallback emitter for platforms without an implementation
//!
//! Constructs like any other variant but never becomes ready, so callers
//! can rely on the uniform `is_ready()`/boolean contract instead of a
//! compile error on niche targets.

use crate::backend::RawEmitter;
use crate::caps::{BackendKind, Capabilities};
use crate::error::EmitError;
use crate::key::Key;

pub(crate) struct UnsupportedEmitter;

impl RawEmitter for UnsupportedEmitter {
    fn kind(&self) -> BackendKind {
        BackendKind::Unsupported
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    fn is_ready(&self) -> bool {
        false
    }

    fn request_permissions(&mut self) -> bool {
        false
    }

    fn emit_key(&mut self, _key: Key, _down: bool) -> Result<(), EmitError> {
        Err(EmitError::Unsupported)
    }

    fn emit_text(&mut self, _units: &[u16]) -> Result<(), EmitError> {
        Err(EmitError::Unsupported)
    }

    fn flush(&mut self) {}
}
