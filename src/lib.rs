//! nope
//!
//! Front end for the Nope API: an HTTP proxy at `/api/nope`, a landing page
//! whose description is a fresh refusal, and a terminal card that fetches,
//! shows and copies one.

pub mod bootstrap;
pub mod card;
pub mod cli;
pub mod web;

pub use cli::{Cli, Command};
