//! Terminal front end for the Nope card.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use nope_app::NopeCard;
use nope_core::ports::{NopeSourcePort, SystemClipboardPort};
use nope_core::CopyOutcome;

const HEADLINE: &str = "Want to decline someone with style?";
const TAGLINE: &str = "This is The NopeAPI [v1.0]";

/// Mount a card, print each state it passes through, then unmount.
///
/// With `copy` set, the phrase is copied once loaded and the confirmation is
/// shown until it resets.
pub async fn run_card<W: Write>(
    source: Arc<dyn NopeSourcePort>,
    clipboard: Arc<dyn SystemClipboardPort>,
    copy: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "{HEADLINE}")?;
    writeln!(out, "{TAGLINE}")?;
    writeln!(out)?;

    let card = NopeCard::mount(source, clipboard);
    writeln!(out, "{}", card.snapshot())?;

    let settled = card.settled().await;
    writeln!(out, "{settled}")?;

    if copy {
        match card.copy().await {
            CopyOutcome::Copied => {
                writeln!(out, "{}", card.snapshot())?;
                let mut rx = card.subscribe();
                rx.wait_for(|s| !s.shows_copied())
                    .await
                    .context("card closed while waiting for copy reset")?;
                writeln!(out, "{}", card.snapshot())?;
            }
            CopyOutcome::NotLoaded => info!("nothing to copy"),
            CopyOutcome::Failed => {}
        }
    }

    card.unmount();
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nope_core::NopeError;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct FixedSource(Result<Value, NopeError>);

    #[async_trait]
    impl NopeSourcePort for FixedSource {
        async fn fetch(&self) -> Result<Value, NopeError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct MemoryClipboard(Mutex<Option<String>>);

    impl SystemClipboardPort for MemoryClipboard {
        fn write_text(&self, text: &str) -> anyhow::Result<()> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn body(text: &str) -> Value {
        json!({
            "success": true,
            "data": { "language": "en", "nope": text },
            "error": null,
            "message": "ok"
        })
    }

    async fn render(
        result: Result<Value, NopeError>,
        clipboard: Arc<MemoryClipboard>,
        copy: bool,
    ) -> Vec<String> {
        let mut out = Vec::new();
        run_card(Arc::new(FixedSource(result)), clipboard, copy, &mut out)
            .await
            .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_prints_loading_then_phrase() {
        let lines = render(
            Ok(body("Absolutely not.")),
            Arc::new(MemoryClipboard::default()),
            false,
        )
        .await;

        assert_eq!(
            lines,
            vec![HEADLINE, TAGLINE, "", "Loading...", "Absolutely not."]
        );
    }

    #[tokio::test]
    async fn test_prints_error_reason() {
        let lines = render(
            Err(NopeError::UpstreamStatus(500)),
            Arc::new(MemoryClipboard::default()),
            false,
        )
        .await;

        assert_eq!(lines.last().unwrap(), "Error: HTTP error! status: 500");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_shows_confirmation_until_reset() {
        let clipboard = Arc::new(MemoryClipboard::default());

        let lines = render(Ok(body("Not today.")), clipboard.clone(), true).await;

        assert_eq!(
            &lines[3..],
            &["Loading...", "Not today.", "Not today.  [Copied!]", "Not today."]
        );
        assert_eq!(clipboard.0.lock().unwrap().as_deref(), Some("Not today."));
    }

    #[tokio::test]
    async fn test_copy_after_failure_does_nothing() {
        let clipboard = Arc::new(MemoryClipboard::default());

        let lines = render(
            Err(NopeError::UpstreamNetwork("connection refused".into())),
            clipboard.clone(),
            true,
        )
        .await;

        assert_eq!(lines.last().unwrap(), "Error: connection refused");
        assert!(clipboard.0.lock().unwrap().is_none());
    }
}
