use std::sync::Arc;

use tracing::{debug, warn};

use nope_core::ports::NopeSourcePort;
use nope_core::{NopeResponse, PageMetadata};

/// Builds the landing page title and description from a fresh phrase.
///
/// Never fails: any upstream problem yields the static description so page
/// rendering is unaffected.
pub struct GeneratePageMetadataUseCase {
    source: Arc<dyn NopeSourcePort>,
}

impl GeneratePageMetadataUseCase {
    pub fn new(source: Arc<dyn NopeSourcePort>) -> Self {
        Self { source }
    }

    /// Fetch a phrase and build the page metadata from it.
    ///
    /// ## Behavior
    /// - The description is `data.nope`; every other field is optional.
    /// - A blank phrase, an upstream error or an undecodable body yields
    ///   [`PageMetadata::fallback`] and a warning.
    pub async fn execute(&self) -> PageMetadata {
        match self.source.fetch().await.and_then(NopeResponse::from_value) {
            Ok(response) => {
                debug!(language = %response.data.language, "page metadata from upstream phrase");
                PageMetadata::from_response(Some(&response))
            }
            Err(err) => {
                warn!(error = %err, "page metadata fetch failed, using fallback description");
                PageMetadata::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nope_core::metadata::{FALLBACK_DESCRIPTION, PAGE_TITLE};
    use nope_core::NopeError;
    use serde_json::{json, Value};

    struct FixedSource(Result<Value, NopeError>);

    #[async_trait]
    impl NopeSourcePort for FixedSource {
        async fn fetch(&self) -> Result<Value, NopeError> {
            self.0.clone()
        }
    }

    fn use_case(result: Result<Value, NopeError>) -> GeneratePageMetadataUseCase {
        GeneratePageMetadataUseCase::new(Arc::new(FixedSource(result)))
    }

    #[tokio::test]
    async fn test_description_comes_from_phrase() {
        let meta = use_case(Ok(json!({
            "success": true,
            "data": { "language": "en", "nope": "I'd rather not." },
            "error": null,
            "message": "ok"
        })))
        .execute()
        .await;

        assert_eq!(meta.title, PAGE_TITLE);
        assert_eq!(meta.description, "I'd rather not.");
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back() {
        let meta = use_case(Err(NopeError::UpstreamNetwork("dns error".into())))
            .execute()
            .await;

        assert_eq!(meta.title, PAGE_TITLE);
        assert_eq!(meta.description, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_phrase_only_body_is_used() {
        let meta = use_case(Ok(json!({ "data": { "nope": "No." } })))
            .execute()
            .await;

        assert_eq!(meta.description, "No.");
    }

    #[tokio::test]
    async fn test_missing_phrase_falls_back() {
        let meta = use_case(Ok(json!({ "success": false, "error": "rate limited" })))
            .execute()
            .await;

        assert_eq!(meta.description, FALLBACK_DESCRIPTION);
    }
}
