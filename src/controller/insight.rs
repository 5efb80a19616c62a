//! State of the insight modal
//!
//! The panel is open while it holds a name. Opening it fetches the insight
//! text in the background; closing it, or opening another name, drops any
//! answer still on its way.

use crate::core::{FetchError, InsightFetcher};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Snapshot of the insight modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightState {
    /// Entity shown in the modal, `None` when closed
    pub name: Option<String>,
    /// Insight text once loaded
    pub description: Option<String>,
    /// Whether a lookup is in flight
    pub loading: bool,
    /// Error of the latest lookup
    pub error: Option<FetchError>,
    generation: u64,
}

impl InsightState {
    pub fn is_open(&self) -> bool {
        self.name.is_some()
    }

    /// Modal title
    pub fn title(&self) -> Option<String> {
        self.name.as_ref().map(|name| format!("{} - AI Insight", name))
    }
}

/// Controller for the insight modal
pub struct InsightPanel {
    state: Arc<watch::Sender<InsightState>>,
    fetcher: Arc<dyn InsightFetcher>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl InsightPanel {
    pub fn new(fetcher: Arc<dyn InsightFetcher>) -> Self {
        let (tx, _rx) = watch::channel(InsightState::default());
        Self {
            state: Arc::new(tx),
            fetcher,
            in_flight: Mutex::new(None),
        }
    }

    /// Open the modal for `name` and start loading its insight
    ///
    /// Must be called inside a Tokio runtime.
    pub fn open(&self, name: &str) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.name = Some(name.to_string());
            state.description = None;
            state.error = None;
            state.loading = true;
            generation = state.generation;
        });

        let state = Arc::clone(&self.state);
        let fetcher = Arc::clone(&self.fetcher);
        let name = name.to_string();
        let handle = tokio::spawn(async move {
            let result = fetcher.fetch_insight(&name).await;
            if let Err(error) = &result {
                tracing::error!(name = %name, error = %error, "Error fetching insight");
            }

            state.send_if_modified(|state| {
                if state.generation != generation {
                    return false;
                }
                match result {
                    Ok(insight) => state.description = Some(insight.description),
                    Err(error) => state.error = Some(error),
                }
                state.loading = false;
                true
            });
        });

        if let Some(previous) = in_flight.replace(handle) {
            previous.abort();
        }
    }

    /// Close the modal, dropping any pending lookup
    pub fn close(&self) {
        let handle = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }

        self.state.send_if_modified(|state| {
            if !state.is_open() && !state.loading {
                return false;
            }
            state.generation += 1;
            state.name = None;
            state.description = None;
            state.error = None;
            state.loading = false;
            true
        });
    }

    pub fn snapshot(&self) -> InsightState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InsightState> {
        self.state.subscribe()
    }
}

impl Drop for InsightPanel {
    fn drop(&mut self) {
        self.close();
    }
}
