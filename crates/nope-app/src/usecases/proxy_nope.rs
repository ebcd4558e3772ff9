use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{error, info_span, Instrument};

use nope_core::ports::NopeSourcePort;

/// Body of the fixed error envelope returned on upstream failure.
pub const PROXY_ERROR_MESSAGE: &str = "Failed to fetch nope data";

/// Outcome of a proxied request.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyReply {
    /// Upstream body, unchanged
    Passthrough(Value),
    /// Upstream failed; details went to the log only
    Failed,
}

impl ProxyReply {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Passthrough(_) => 200,
            Self::Failed => 500,
        }
    }

    pub fn into_body(self) -> Value {
        match self {
            Self::Passthrough(body) => body,
            Self::Failed => json!({ "error": PROXY_ERROR_MESSAGE }),
        }
    }
}

/// Forwards a single request to the Nope API.
///
/// Every upstream failure collapses into [`ProxyReply::Failed`]; the cause
/// is logged and never reaches the caller.
pub struct ProxyNopeUseCase {
    source: Arc<dyn NopeSourcePort>,
}

impl ProxyNopeUseCase {
    pub fn new(source: Arc<dyn NopeSourcePort>) -> Self {
        Self { source }
    }

    /// Fetch once from the upstream source.
    ///
    /// ## Behavior
    /// - Any body the source returns is passed through untouched, including
    ///   fields the card never reads.
    /// - A status, network or decode failure is logged as `API Error` with
    ///   its kind and becomes [`ProxyReply::Failed`].
    /// - No retries.
    pub async fn execute(&self) -> ProxyReply {
        let span = info_span!("usecase.proxy_nope.execute");
        async {
            match self.source.fetch().await {
                Ok(body) => ProxyReply::Passthrough(body),
                Err(err) => {
                    error!(error = %err, kind = ?err.kind(), "API Error");
                    ProxyReply::Failed
                }
            }
        }
        .instrument(span)
        .await
    }
}
