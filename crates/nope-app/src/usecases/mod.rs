pub mod page_metadata;
pub mod proxy_nope;

pub use page_metadata::GeneratePageMetadataUseCase;
pub use proxy_nope::{ProxyNopeUseCase, ProxyReply, PROXY_ERROR_MESSAGE};
