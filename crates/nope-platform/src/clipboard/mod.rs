use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use tracing::{debug, warn};

use nope_core::ports::SystemClipboardPort;

/// System clipboard backed by `arboard`.
///
/// One handle is kept for the adapter's lifetime; on X11 the owning handle
/// has to stay alive for the selection to be served.
pub struct ArboardClipboard {
    inner: Mutex<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("failed to open system clipboard")?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }
}

impl SystemClipboardPort for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        clipboard
            .set_text(text.to_owned())
            .context("failed to write text to clipboard")?;
        debug!(len = text.len(), "clipboard text written");
        Ok(())
    }
}

/// Stand-in used when no clipboard backend could be opened.
///
/// Every write fails with the reason the backend was unavailable.
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SystemClipboardPort for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(anyhow!("clipboard unavailable: {}", self.reason))
    }
}

/// Open the system clipboard, degrading to [`UnavailableClipboard`] on
/// headless hosts.
pub fn system_clipboard() -> Arc<dyn SystemClipboardPort> {
    match ArboardClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "system clipboard unavailable, copy disabled");
            Arc::new(UnavailableClipboard::new(format!("{err:#}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_clipboard_reports_reason() {
        let clipboard = UnavailableClipboard::new("no display");

        let err = clipboard.write_text("Not today.").unwrap_err();

        assert_eq!(err.to_string(), "clipboard unavailable: no display");
    }
}
