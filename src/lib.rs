//! softboard-input - keyboard injection backend for the Softboard on-screen keyboard
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             InputBackend facade              │
//! ├──────────────────────────────────────────────┤
//! │  Key/Modifier model  →  Key Mapper (native)  │
//! │                              ↓               │
//! │                  Raw Emitter (per platform)  │
//! │                              ↓               │
//! │        uinput (Linux) / SendInput (Windows)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The facade tracks which modifiers this process has injected, paces
//! down/up transitions, and flattens every platform failure into a plain
//! `false` return. Callers poll [`InputBackend::capabilities`] and
//! [`InputBackend::is_ready`] to decide what to offer the user.
//!
//! A backend instance is `Send` but deliberately not `Sync`: every mutating
//! operation takes `&mut self`, so access from multiple threads must be
//! serialized by the caller.

pub mod backend;
pub mod caps;
pub mod key;
pub mod map;
pub mod options;
pub mod text;

mod error;

pub use backend::InputBackend;
pub use caps::{BackendKind, Capabilities};
pub use key::{Key, KeyStroke, Modifier};
pub use options::Options;
