//! Infrastructure adapters for nope.

pub mod http;

pub use http::HttpNopeSource;
