//! nope application layer
//!
//! Use cases for the proxy endpoint and page metadata, plus the [`NopeCard`]
//! controller that drives the display widget.

pub mod card;
pub mod usecases;

pub use card::NopeCard;
pub use usecases::{GeneratePageMetadataUseCase, ProxyNopeUseCase, ProxyReply};
