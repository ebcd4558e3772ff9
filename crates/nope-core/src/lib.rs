//! # nope-core
//!
//! Core domain models and business rules for nope.
//!
//! This crate contains pure domain types and port traits without any
//! infrastructure dependencies.

pub mod card;
pub mod config;
pub mod errors;
pub mod metadata;
pub mod nope;
pub mod ports;

// Re-export commonly used types at the crate root
pub use card::{CardSnapshot, CardView, CopyOutcome, CopyState, FetchState};
pub use config::AppConfig;
pub use errors::{NopeError, NopeErrorKind};
pub use metadata::PageMetadata;
pub use nope::{NopeData, NopeResponse};
