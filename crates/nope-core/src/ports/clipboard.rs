use anyhow::Result;

/// System clipboard access.
///
/// Writes are blocking on most platforms; callers running on an async
/// runtime should move them off the reactor.
pub trait SystemClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
