//! Listing and modal controllers
//!
//! - [`ListController`]: paging, search, sort and fetch sequencing for one listing
//! - [`Debouncer`]: quiet-period stage in front of search input
//! - [`InsightPanel`]: the insight modal's fetch and open/close state

pub mod debounce;
pub mod insight;
pub mod list;
pub mod state;

pub use debounce::Debouncer;
pub use insight::{InsightPanel, InsightState};
pub use list::{ListController, ListOptions};
pub use state::{ListEvent, ListQueryState, Phase, SortIndicator, Transition};
