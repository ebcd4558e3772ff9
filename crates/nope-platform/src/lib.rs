//! Platform adapters for nope.

pub mod clipboard;

pub use clipboard::{system_clipboard, ArboardClipboard, UnavailableClipboard};
