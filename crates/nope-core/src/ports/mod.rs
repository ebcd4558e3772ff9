//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `nope-app` and the
//! adapters in `nope-infra` / `nope-platform`.

mod clipboard;
mod nope_source;

pub use clipboard::SystemClipboardPort;
pub use nope_source::NopeSourcePort;
