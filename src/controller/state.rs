//! Listing state and its transitions
//!
//! [`ListQueryState`] is a plain state machine. Every change goes through
//! [`ListQueryState::apply`], which reports what the caller has to do next:
//!
//! ```text
//!            SetPage / Search / Sort / Refresh
//!   Idle ──────────────────────────────────────▶ Loading ◀──┐
//!                                                 │   │      │ parameters
//!                            FetchSucceeded(gen)  │   │      │ changed
//!                      ┌──────────────────────────┘   │      │
//!                      ▼                              ▼      │
//!                   Loaded ─────────────────────▶  Failed ───┘
//!                          FetchFailed(gen)
//! ```
//!
//! Each issued fetch gets a fresh generation. Settle events carrying an older
//! generation are stale and leave the state untouched.

use crate::core::{FetchError, FetchParams, ListPage, PaginationView, SortColumn, SortOrder};

/// Lifecycle phase of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch issued yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The latest fetch succeeded
    Loaded,
    /// The latest fetch failed; the previous page is still shown
    Failed,
}

/// Inputs to the listing state machine
#[derive(Debug, Clone)]
pub enum ListEvent<T> {
    /// Jump to a page
    SetPage(usize),
    /// Settled search input
    Search(String),
    /// Column header clicked
    Sort(SortColumn),
    /// Re-issue the fetch for the current parameters
    Refresh,
    /// A fetch completed
    FetchSucceeded { generation: u64, page: ListPage<T> },
    /// A fetch failed
    FetchFailed { generation: u64, error: FetchError },
}

/// Outcome of applying a [`ListEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Unchanged,
    /// Query parameters changed, a new fetch cycle is due
    ParametersChanged,
    /// A fetch result was applied
    Applied,
    /// A fetch result belonged to a superseded request and was dropped
    Stale,
    /// The listing is disposed, the event was dropped
    Disposed,
}

/// Header arrow for a sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortIndicator {
    /// Direction the arrow points
    pub direction: SortOrder,
    /// Whether the listing is currently sorted by this column
    pub active: bool,
}

/// State of one listing view
#[derive(Debug, Clone)]
pub struct ListQueryState<T> {
    page: usize,
    page_size: usize,
    search_query: String,
    sort_column: SortColumn,
    sort_direction: SortOrder,
    items: Vec<T>,
    total: usize,
    loading: bool,
    phase: Phase,
    generation: u64,
    last_error: Option<FetchError>,
    disposed: bool,
}

impl<T> ListQueryState<T> {
    pub fn new(page_size: usize, sort_column: SortColumn) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search_query: String::new(),
            sort_column,
            sort_direction: SortOrder::Ascending,
            items: Vec::new(),
            total: 0,
            loading: false,
            phase: Phase::Idle,
            generation: 0,
            last_error: None,
            disposed: false,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortOrder {
        self.sort_direction
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Generation of the most recently issued fetch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Error of the latest fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Request parameters for the current state
    pub fn fetch_params(&self) -> FetchParams {
        FetchParams {
            page: self.page,
            search: self.search_query.clone(),
            sort_by: self.sort_column,
            order: self.sort_direction,
        }
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::new(self.page, self.total, self.page_size)
    }

    pub fn sort_indicator(&self, column: SortColumn) -> SortIndicator {
        if column == self.sort_column {
            SortIndicator {
                direction: self.sort_direction,
                active: true,
            }
        } else {
            SortIndicator {
                direction: SortOrder::Ascending,
                active: false,
            }
        }
    }

    /// Apply one event
    ///
    /// Once disposed, every event is ignored.
    pub fn apply(&mut self, event: ListEvent<T>) -> Transition {
        if self.disposed {
            return Transition::Disposed;
        }

        match event {
            ListEvent::SetPage(page) => {
                let page = page.max(1);
                if page == self.page {
                    return Transition::Unchanged;
                }
                self.page = page;
                Transition::ParametersChanged
            }
            ListEvent::Search(query) => {
                let query = query.trim();
                if query == self.search_query {
                    return Transition::Unchanged;
                }
                self.search_query = query.to_string();
                self.page = 1;
                Transition::ParametersChanged
            }
            ListEvent::Sort(column) => {
                if column == self.sort_column {
                    self.sort_direction = self.sort_direction.toggled();
                } else {
                    self.sort_column = column;
                    self.sort_direction = SortOrder::Ascending;
                }
                self.page = 1;
                Transition::ParametersChanged
            }
            ListEvent::Refresh => Transition::ParametersChanged,
            ListEvent::FetchSucceeded { generation, page } => {
                if generation != self.generation {
                    return Transition::Stale;
                }
                let mut results = page.results;
                results.truncate(self.page_size);
                self.items = results;
                self.total = page.count;
                self.loading = false;
                self.phase = Phase::Loaded;
                self.last_error = None;
                Transition::Applied
            }
            ListEvent::FetchFailed { generation, error } => {
                if generation != self.generation {
                    return Transition::Stale;
                }
                self.loading = false;
                self.phase = Phase::Failed;
                self.last_error = Some(error);
                Transition::Applied
            }
        }
    }

    /// Mark a new fetch as issued and return its generation and parameters
    pub fn begin_fetch(&mut self) -> (u64, FetchParams) {
        self.generation += 1;
        self.loading = true;
        self.phase = Phase::Loading;
        (self.generation, self.fetch_params())
    }

    /// Freeze the state; later events are ignored
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.loading = false;
    }
}
