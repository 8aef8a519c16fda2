//! Internal emitter errors
//!
//! The public API flattens every failure into a boolean; these variants only
//! travel between an emitter and the facade, where they are logged before
//! being collapsed.

// Not every variant is constructed on every platform.
#![allow(dead_code)]

use thiserror::Error;

use crate::key::Key;

#[derive(Debug, Error)]
pub(crate) enum EmitError {
    #[error("no native mapping for {0:?}")]
    NoMapping(Key),

    #[error("backend not ready")]
    NotReady,

    #[error("operation not supported by this backend")]
    Unsupported,

    #[error("partial injection: {accepted}/{requested} events accepted")]
    Partial { requested: usize, accepted: usize },

    #[error("device write failed: {0}")]
    Io(#[from] std::io::Error),
}
