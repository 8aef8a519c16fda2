//! Per-platform key mappers
//!
//! Each mapper translates a neutral [`crate::Key`] into the platform's
//! native code. Lookup tables are built once per backend instance into an
//! immutable structure; layout changes after construction are not tracked.
//! A key without a native code is reported as `None`, never an error.

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "windows")]
pub mod windows;
