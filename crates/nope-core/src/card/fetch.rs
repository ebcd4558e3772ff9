use crate::errors::NopeError;
use crate::nope::NopeResponse;

/// Message shown when a failure carries no text of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch data";

/// Lifecycle of a single fetch attempt.
///
/// State transitions:
///
/// ```text
/// Idle ──(mount)──→ Loading ──→ Loaded
///                          └──→ Failed
/// ```
///
/// `Loaded` and `Failed` are terminal for the lifetime of a mount; a new
/// attempt needs a fresh `Idle` state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Not mounted yet
    #[default]
    Idle,

    /// Request in flight
    Loading,

    /// Request succeeded with a decodable payload
    Loaded(NopeResponse),

    /// Request failed; holds a human-readable message
    Failed(String),
}

impl FetchState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Start loading on mount
    pub fn start(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Loading),
            _ => None,
        }
    }

    /// Transition after the request resolves.
    ///
    /// Only a `Loading` state moves; anything else is returned unchanged so
    /// a late result can never overwrite a settled state.
    pub fn on_result(self, result: Result<NopeResponse, NopeError>) -> Self {
        match self {
            Self::Loading => match result {
                Ok(response) => Self::Loaded(response),
                Err(err) => Self::Failed(failure_message(&err)),
            },
            _ => self,
        }
    }

    pub fn content(&self) -> Option<&NopeResponse> {
        match self {
            Self::Loaded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Human-readable message for a failed fetch.
pub fn failure_message(err: &NopeError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FETCH_FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nope::NopeData;

    fn response(text: &str) -> NopeResponse {
        NopeResponse {
            success: true,
            data: NopeData {
                language: "en".into(),
                nope: text.into(),
            },
            error: serde_json::Value::Null,
            message: "ok".into(),
        }
    }

    #[test]
    fn test_success_flow() {
        let state = FetchState::Idle.start().unwrap();
        assert!(state.is_loading());

        let state = state.on_result(Ok(response("Absolutely not.")));
        assert!(state.is_terminal());
        assert_eq!(state.content().unwrap().phrase(), "Absolutely not.");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_flow_keeps_error_message() {
        let state = FetchState::Idle
            .start()
            .unwrap()
            .on_result(Err(NopeError::UpstreamStatus(500)));

        assert_eq!(state, FetchState::Failed("HTTP error! status: 500".into()));
        assert!(state.content().is_none());
    }

    #[test]
    fn test_empty_message_falls_back() {
        let state = FetchState::Loading.on_result(Err(NopeError::UpstreamNetwork("  ".into())));

        assert_eq!(state.error(), Some(FETCH_FALLBACK_MESSAGE));
    }

    #[test]
    fn test_start_only_from_idle() {
        assert!(FetchState::Loading.start().is_none());
        assert!(FetchState::Failed("x".into()).start().is_none());
        assert!(FetchState::Loaded(response("no")).start().is_none());
    }

    #[test]
    fn test_settled_state_ignores_late_results() {
        let settled = FetchState::Failed("first".into());

        let after = settled.clone().on_result(Ok(response("late")));

        assert_eq!(after, settled);
    }
}
