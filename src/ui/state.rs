//! Display state of a mounted component and the lifetime its fetches are tied to.

use std::future::Future;

use tokio::sync::watch;

use crate::backend::FetchError;

/// What a component currently has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub(crate) fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(v) => Some(v),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// The mounted lifetime of a page. Dropping it, or calling [`Mount::unmount`],
/// cancels every token handed out.
#[derive(Debug)]
pub(crate) struct Mount {
    tx: watch::Sender<bool>,
}

impl Mount {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub(crate) fn token(&self) -> MountToken {
        MountToken {
            rx: self.tx.subscribe(),
        }
    }

    pub(crate) fn unmount(self) {
        self.tx.send_replace(true);
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MountToken {
    rx: watch::Receiver<bool>,
}

impl MountToken {
    pub(crate) fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolves once the owning [`Mount`] is unmounted or dropped.
    pub(crate) async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Run one fetch for a mounted component.
///
/// Returns the new display state, or `None` if the component was unmounted first,
/// in which case the result is abandoned and the caller must leave its state alone.
pub(crate) async fn load<T, F>(token: &mut MountToken, what: &str, fetch: F) -> Option<LoadState<T>>
where
    F: Future<Output = Result<T, FetchError>>,
{
    if token.is_cancelled() {
        tracing::debug!(what, "not fetching for an unmounted component");
        return None;
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!(what, "unmounted before the response arrived; result abandoned");
            None
        }
        result = fetch => match result {
            Ok(value) => Some(LoadState::Loaded(value)),
            Err(e) => {
                tracing::warn!(what, error = %e, "fetch failed");
                Some(LoadState::Failed(e.to_string()))
            }
        },
    }
}
