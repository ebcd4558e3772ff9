use std::fmt;

use super::copy::CopyState;
use super::fetch::FetchState;

/// What the card shows for a given fetch state.
///
/// Exactly one variant is active, so the loading indicator, the error text
/// and the phrase can never appear together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Loading,
    Error(String),
    Nope(String),
}

impl CardView {
    /// Apply the rendering precedence: loading, then error, then content.
    ///
    /// `Idle` only exists before mount and renders as the loading indicator.
    pub fn render(state: &FetchState) -> Self {
        match state {
            FetchState::Idle | FetchState::Loading => Self::Loading,
            FetchState::Failed(message) => Self::Error(message.clone()),
            FetchState::Loaded(response) => Self::Nope(response.phrase().to_string()),
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading..."),
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Nope(text) => write!(f, "{text}"),
        }
    }
}

/// Point-in-time view of a mounted card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardSnapshot {
    pub fetch: FetchState,
    pub copy: CopyState,
}

impl CardSnapshot {
    pub fn view(&self) -> CardView {
        CardView::render(&self.fetch)
    }

    /// Whether the copy confirmation overlay is up.
    pub fn shows_copied(&self) -> bool {
        self.copy.is_copied()
    }
}

impl fmt::Display for CardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.view())?;
        if self.shows_copied() {
            write!(f, "  [Copied!]")?;
        }
        Ok(())
    }
}
