use crate::nope::NopeResponse;

pub const PAGE_TITLE: &str = "Nope.rs - For when you need to decline with pazazz";
pub const FALLBACK_DESCRIPTION: &str = "Nope...";

/// Title and description for the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    /// Build metadata from an upstream payload, if one is available.
    ///
    /// A missing payload or an empty phrase yields the static description.
    pub fn from_response(response: Option<&NopeResponse>) -> Self {
        let description = response
            .map(|r| r.phrase().trim())
            .filter(|phrase| !phrase.is_empty())
            .unwrap_or(FALLBACK_DESCRIPTION)
            .to_string();

        Self {
            title: PAGE_TITLE.to_string(),
            description,
        }
    }

    pub fn fallback() -> Self {
        Self::from_response(None)
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
            message: String::new(),
        }
    }

    #[test]
    fn test_description_uses_phrase() {
        let meta = PageMetadata::from_response(Some(&response("Not a chance.")));

        assert_eq!(meta.title, PAGE_TITLE);
        assert_eq!(meta.description, "Not a chance.");
    }

    #[test]
    fn test_fallback_without_payload() {
        assert_eq!(PageMetadata::fallback().description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_blank_phrase_falls_back() {
        let meta = PageMetadata::from_response(Some(&response("   ")));

        assert_eq!(meta.description, FALLBACK_DESCRIPTION);
    }
}
