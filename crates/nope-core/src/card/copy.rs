use std::time::Duration;

/// How long the copy confirmation stays visible.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Transient flag raised after a successful clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyState(bool);

impl CopyState {
    pub fn copied() -> Self {
        Self(true)
    }

    pub fn is_copied(self) -> bool {
        self.0
    }

    pub fn reset(self) -> Self {
        Self(false)
    }
}

/// Result of a single copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Phrase written to the clipboard, confirmation raised
    Copied,
    /// Nothing to copy: the card is not showing a phrase
    NotLoaded,
    /// Clipboard rejected the write; logged and otherwise ignored
    Failed,
}
