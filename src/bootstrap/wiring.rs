//! Dependency wiring: builds adapters from config and hands them to the
//! use cases.

use std::sync::Arc;
use std::time::Duration;

use nope_app::{GeneratePageMetadataUseCase, ProxyNopeUseCase};
use nope_core::ports::NopeSourcePort;
use nope_core::AppConfig;
use nope_infra::HttpNopeSource;

use crate::web::WebState;

fn request_timeout(config: &AppConfig) -> Duration {
    Duration::from_millis(config.upstream_timeout_ms)
}

/// Source pointed at the external Nope API.
pub fn upstream_source(config: &AppConfig) -> anyhow::Result<Arc<dyn NopeSourcePort>> {
    let source = HttpNopeSource::new(config.upstream_url.clone(), request_timeout(config))?;
    Ok(Arc::new(source))
}

/// Source the card fetches from: the local proxy endpoint, unless overridden.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn card_source(
    config: &AppConfig,
    url_override: Option<&str>,
) -> anyhow::Result<Arc<dyn NopeSourcePort>> {
    let url = url_override.unwrap_or(config.card_proxy_url.as_str());
    let source = HttpNopeSource::new(url, request_timeout(config))?;
    Ok(Arc::new(source))
}

/// Build the state shared by every HTTP handler.
///
/// # Errors
///
/// Returns an error if the HTTP client for the upstream source cannot be
/// built (for example when the TLS backend fails to initialize).
///
/// ## Wiring
/// 1. One upstream source, with the configured URL and timeout
/// 2. The proxy and page metadata use cases share that source
pub fn web_state(config: &AppConfig) -> anyhow::Result<WebState> {
    // Step 1: upstream adapter
    let upstream = upstream_source(config)?;

    // Step 2: use cases over the shared adapter
    Ok(WebState {
        proxy: Arc::new(ProxyNopeUseCase::new(Arc::clone(&upstream))),
        metadata: Arc::new(GeneratePageMetadataUseCase::new(upstream)),
    })
}
