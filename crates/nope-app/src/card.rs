//! Controller for the Nope card widget.
//!
//! A [`NopeCard`] is one mount of the widget. Mounting starts a single fetch;
//! the result settles the card into `Loaded` or `Failed` for the rest of its
//! life. Copy requests raise a confirmation that drops back after
//! [`COPY_RESET_DELAY`].
//!
//! All mutations go through one lock that also holds the `disposed` flag, so
//! nothing is written once the card is unmounted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, error, info};

use nope_core::card::copy::COPY_RESET_DELAY;
use nope_core::ports::{NopeSourcePort, SystemClipboardPort};
use nope_core::{CardSnapshot, CopyOutcome, CopyState, NopeError, NopeResponse};

struct CardModel {
    snapshot: CardSnapshot,
    disposed: bool,
    copy_generation: u64,
    copy_timer: Option<AbortHandle>,
}

struct CardShared {
    model: Mutex<CardModel>,
    tx: watch::Sender<CardSnapshot>,
}

impl CardShared {
    fn lock(&self) -> MutexGuard<'_, CardModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` and publish the new snapshot, unless the card is disposed.
    fn update<R>(&self, f: impl FnOnce(&mut CardModel) -> R) -> Option<R> {
        let mut model = self.lock();
        if model.disposed {
            return None;
        }
        let out = f(&mut model);
        self.tx.send_replace(model.snapshot.clone());
        Some(out)
    }
}

pub struct NopeCard {
    shared: Arc<CardShared>,
    clipboard: Arc<dyn SystemClipboardPort>,
    fetch_task: Option<AbortHandle>,
    reset_delay: Duration,
}

impl NopeCard {
    /// Mount a card and start its fetch.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// ## Behavior
    /// - The card is `Loading` before this returns.
    /// - The fetch runs on a spawned task. Its result settles the card into
    ///   `Loaded` or `Failed`, unless the card was unmounted first.
    /// - Fetch and decode failures are logged as `Fetch error`.
    pub fn mount(
        source: Arc<dyn NopeSourcePort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        let snapshot = CardSnapshot::default();
        let (tx, _rx) = watch::channel(snapshot.clone());
        let shared = Arc::new(CardShared {
            model: Mutex::new(CardModel {
                snapshot,
                disposed: false,
                copy_generation: 0,
                copy_timer: None,
            }),
            tx,
        });

        shared.update(|model| {
            let fetch = std::mem::take(&mut model.snapshot.fetch);
            model.snapshot.fetch = fetch.start().unwrap_or_default();
        });

        let task_shared = Arc::clone(&shared);
        let handle = tokio::spawn(async move {
            let result = source.fetch().await.and_then(NopeResponse::from_value);
            if let Err(err) = &result {
                error!(error = %err, "Fetch error");
            }

            let applied = task_shared.update(move |model| {
                let fetch = std::mem::take(&mut model.snapshot.fetch);
                model.snapshot.fetch = fetch.on_result(result);
            });
            if applied.is_none() {
                debug!("card unmounted before fetch resolved, result discarded");
            }
        });

        Self {
            shared,
            clipboard,
            fetch_task: Some(handle.abort_handle()),
            reset_delay: COPY_RESET_DELAY,
        }
    }

    pub fn snapshot(&self) -> CardSnapshot {
        self.shared.lock().snapshot.clone()
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CardSnapshot> {
        self.shared.tx.subscribe()
    }

    /// Wait until the fetch has settled into `Loaded` or `Failed`.
    pub async fn settled(&self) -> CardSnapshot {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|s| s.fetch.is_terminal()).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        };
        settled
    }

    /// Whether a copy confirmation reset is still scheduled.
    pub fn has_pending_reset(&self) -> bool {
        self.shared.lock().copy_timer.is_some()
    }

    /// Copy the phrase to the system clipboard.
    ///
    /// Clipboard failures are logged and otherwise swallowed: the card's
    /// state does not change.
    pub async fn copy(&self) -> CopyOutcome {
        let Some(text) = self
            .snapshot()
            .fetch
            .content()
            .map(|response| response.phrase().to_string())
        else {
            debug!("copy requested before a phrase was loaded");
            return CopyOutcome::NotLoaded;
        };

        let clipboard = Arc::clone(&self.clipboard);
        let written = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
            .await
            .map_err(anyhow::Error::from)
            .and_then(|result| result);

        if let Err(err) = written {
            let err = NopeError::ClipboardDenied(format!("{err:#}"));
            error!(error = %err, "Failed to copy");
            return CopyOutcome::Failed;
        }

        self.raise_copied();
        CopyOutcome::Copied
    }

    /// Raise the confirmation and (re)arm its reset timer.
    fn raise_copied(&self) {
        let delay = self.reset_delay;
        let timer_shared = Arc::clone(&self.shared);

        self.shared.update(move |model| {
            model.copy_generation += 1;
            let generation = model.copy_generation;

            if let Some(previous) = model.copy_timer.take() {
                previous.abort();
            }
            model.snapshot.copy = CopyState::copied();

            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                timer_shared.update(|model| {
                    // a newer copy owns the flag now
                    if model.copy_generation == generation {
                        model.snapshot.copy = model.snapshot.copy.reset();
                        model.copy_timer = None;
                    }
                });
            });
            model.copy_timer = Some(handle.abort_handle());
            info!(generation, ?delay, "copy confirmation raised");
        });
    }

    /// Tear the card down. Pending work is cancelled and late results are
    /// dropped.
    pub fn unmount(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        // mark disposed under the state lock so in-flight writers see it
        let timer = {
            let mut model = self.shared.lock();
            if model.disposed {
                return;
            }
            model.disposed = true;
            model.copy_timer.take()
        };

        if let Some(timer) = timer {
            timer.abort();
        }
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        debug!("card unmounted");
    }
}

impl Drop for NopeCard {
    fn drop(&mut self) {
        self.dispose();
    }
}
