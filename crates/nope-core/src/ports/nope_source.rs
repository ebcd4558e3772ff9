use async_trait::async_trait;
use serde_json::Value;

use crate::errors::NopeError;

/// Source of Nope API payloads.
///
/// Implementations return the decoded JSON body untouched, so the proxy can
/// pass it through verbatim. A non-2xx status, a transport failure or a
/// body that is not JSON must surface as an `Upstream*` error.
#[async_trait]
pub trait NopeSourcePort: Send + Sync {
    async fn fetch(&self) -> Result<Value, NopeError>;
}
