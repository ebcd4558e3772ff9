use thiserror::Error;

/// Errors raised while talking to the Nope API or the system clipboard.
///
/// Display strings are user-facing: the card shows them verbatim after
/// `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NopeError {
    #[error("HTTP error! status: {0}")]
    UpstreamStatus(u16),

    #[error("{0}")]
    UpstreamNetwork(String),

    #[error("invalid response body: {0}")]
    UpstreamDecode(String),

    #[error("clipboard write denied: {0}")]
    ClipboardDenied(String),
}

/// Coarse classification of [`NopeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NopeErrorKind {
    /// Network failure, non-2xx status or undecodable body from the upstream API
    UpstreamUnavailable,
    /// Clipboard rejected the write (permissions or unsupported environment)
    ClipboardDenied,
}

impl NopeError {
    pub fn kind(&self) -> NopeErrorKind {
        match self {
            Self::UpstreamStatus(_) | Self::UpstreamNetwork(_) | Self::UpstreamDecode(_) => {
                NopeErrorKind::UpstreamUnavailable
            }
            Self::ClipboardDenied(_) => NopeErrorKind::ClipboardDenied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_the_status() {
        assert_eq!(
            NopeError::UpstreamStatus(503).to_string(),
            "HTTP error! status: 503"
        );
    }

    #[test]
    fn test_kind_groups_upstream_failures() {
        assert_eq!(
            NopeError::UpstreamStatus(404).kind(),
            NopeErrorKind::UpstreamUnavailable
        );
        assert_eq!(
            NopeError::UpstreamNetwork("timed out".into()).kind(),
            NopeErrorKind::UpstreamUnavailable
        );
        assert_eq!(
            NopeError::UpstreamDecode("eof".into()).kind(),
            NopeErrorKind::UpstreamUnavailable
        );
        assert_eq!(
            NopeError::ClipboardDenied("no display".into()).kind(),
            NopeErrorKind::ClipboardDenied
        );
    }
}
