//! Async listing controller
//!
//! [`ListController`] wires a [`ListQueryState`] to a [`ListFetcher`]. UI
//! intents (page change, settled search input, header click) mutate the
//! state; every parameter change issues exactly one fetch cycle on a spawned
//! task. Snapshots are published through a `tokio::sync::watch` channel.
//!
//! # Ordering
//!
//! ```text
//! handle_search("sky") ──▶ begin_fetch() = gen 4 ──▶ spawn ──▶ fetch ──┐
//! handle_sort(Created) ──▶ begin_fetch() = gen 5 ──▶ spawn ──▶ fetch ──┼─▶ apply(gen 5)  ✔
//!                                (gen 4 task aborted)                  └─▶ apply(gen 4)  ✘ stale
//! ```
//!
//! A superseded task is aborted, and its result would be rejected anyway
//! since only the current generation is applied.

use super::state::{ListEvent, ListQueryState, Transition};
use crate::config::ClientConfig;
use crate::core::{FetchParams, ListFetcher, SortColumn};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_stream::wrappers::WatchStream;

/// Construction options for a [`ListController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Records per page
    pub page_size: usize,
    /// Column sorted by on mount
    pub default_sort: SortColumn,
    /// Floor between issuing a fetch and applying a successful result
    pub min_loading: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page_size: 15,
            default_sort: SortColumn::Name,
            min_loading: Duration::from_millis(500),
        }
    }
}

impl ListOptions {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            page_size: config.page_size,
            min_loading: config.min_loading(),
            ..Self::default()
        }
    }

    pub fn with_default_sort(mut self, column: SortColumn) -> Self {
        self.default_sort = column;
        self
    }

    pub fn with_min_loading(mut self, min_loading: Duration) -> Self {
        self.min_loading = min_loading;
        self
    }
}

/// State controller for one listing view
///
/// Must be created inside a Tokio runtime. Dropping the controller disposes
/// it: the in-flight fetch is aborted and its result is never applied.
pub struct ListController<T> {
    state: Arc<watch::Sender<ListQueryState<T>>>,
    fetcher: Arc<dyn ListFetcher<T>>,
    min_loading: Duration,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create the controller and issue the initial fetch
    pub fn mount(fetcher: Arc<dyn ListFetcher<T>>, options: ListOptions) -> Self {
        let state = ListQueryState::new(options.page_size, options.default_sort);
        let (tx, _rx) = watch::channel(state);
        let controller = Self {
            state: Arc::new(tx),
            fetcher,
            min_loading: options.min_loading,
            in_flight: Mutex::new(None),
        };
        controller.dispatch(ListEvent::Refresh);
        controller
    }

    /// Jump to page `n`
    ///
    /// Pagination controls are expected to stay within `1..=total_pages`;
    /// `0` is clamped to `1`. Returns whether a fetch was issued.
    pub fn set_page(&self, n: usize) -> bool {
        self.dispatch(ListEvent::SetPage(n))
    }

    /// Apply settled search input
    ///
    /// The query is trimmed. Repeating the current query does nothing.
    /// Returns whether a fetch was issued.
    pub fn handle_search(&self, query: &str) -> bool {
        self.dispatch(ListEvent::Search(query.to_string()))
    }

    /// Sort by `column`, toggling direction when it is already the sort column
    pub fn handle_sort(&self, column: SortColumn) -> bool {
        self.dispatch(ListEvent::Sort(column))
    }

    /// Re-issue the fetch for the current parameters
    pub fn refresh(&self) -> bool {
        self.dispatch(ListEvent::Refresh)
    }

    /// Current state
    pub fn snapshot(&self) -> ListQueryState<T> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every visible state change
    pub fn subscribe(&self) -> watch::Receiver<ListQueryState<T>> {
        self.state.subscribe()
    }

    /// Stream of state snapshots, starting with the current one
    pub fn updates(&self) -> WatchStream<ListQueryState<T>> {
        WatchStream::new(self.subscribe())
    }

    fn dispatch(&self, event: ListEvent<T>) -> bool {
        // Held across begin_fetch and spawn so handles are replaced in generation order.
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        let mut request = None;
        self.state.send_if_modified(|state| match state.apply(event) {
            Transition::ParametersChanged => {
                request = Some(state.begin_fetch());
                true
            }
            _ => false,
        });

        let Some((generation, params)) = request else {
            return false;
        };
        let handle = self.spawn_fetch(generation, params, Instant::now());
        if let Some(previous) = in_flight.replace(handle) {
            previous.abort();
        }
        true
    }

    /// Run one fetch cycle; the min-loading floor counts from `issued`
    fn spawn_fetch(&self, generation: u64, params: FetchParams, issued: Instant) -> JoinHandle<()> {
        tracing::debug!(
            generation,
            page = params.page,
            search = %params.search,
            sort_by = %params.sort_by,
            order = %params.order,
            "Issuing listing fetch"
        );

        let state = Arc::clone(&self.state);
        let fetcher = Arc::clone(&self.fetcher);
        let min_loading = self.min_loading;

        tokio::spawn(async move {
            let event = match fetcher.fetch_list(&params).await {
                Ok(page) => {
                    tokio::time::sleep(min_loading.saturating_sub(issued.elapsed())).await;
                    ListEvent::FetchSucceeded { generation, page }
                }
                Err(error) => {
                    tracing::error!(
                        generation,
                        code = error.error_code(),
                        error = %error,
                        "Error fetching data"
                    );
                    ListEvent::FetchFailed { generation, error }
                }
            };

            let mut transition = Transition::Unchanged;
            state.send_if_modified(|state| {
                transition = state.apply(event);
                transition == Transition::Applied
            });
            match transition {
                Transition::Stale => {
                    tracing::debug!(generation, "Discarded stale listing response")
                }
                Transition::Disposed => {
                    tracing::warn!(generation, "Discarded listing response after dispose")
                }
                _ => {}
            }
        })
    }
}

impl<T> ListController<T> {
    /// Stop the listing; pending results are never applied
    pub fn dispose(&self) {
        let disposed = self.state.send_if_modified(|state| {
            if state.is_disposed() {
                return false;
            }
            state.dispose();
            true
        });
        let handle = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
        if disposed {
            tracing::debug!("Listing disposed");
        }
    }
}

impl<T> Drop for ListController<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
