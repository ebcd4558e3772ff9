use std::sync::Arc;

use nope_app::{GeneratePageMetadataUseCase, ProxyNopeUseCase};

/// Shared handler state. Holds no per-request data.
#[derive(Clone)]
pub struct WebState {
    pub proxy: Arc<ProxyNopeUseCase>,
    pub metadata: Arc<GeneratePageMetadataUseCase>,
}
