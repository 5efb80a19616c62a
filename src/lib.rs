//! # swapi-table
//!
//! Paginated, searchable, sortable listings of Star Wars people and planets,
//! backed by a remote REST API.
//!
//! ## Features
//!
//! - **List controller**: owns page, search, sort, items, total and loading state for one listing
//! - **Stale-response discard**: only the most recently issued fetch is ever applied
//! - **One fetcher for every resource**: `/people` and `/planets` share the same adapter
//! - **Pagination math**: page index lists with ellipsis collapsing and range summaries
//! - **Debounced search**: a quiet-period stage in front of the controller
//! - **Insight modal**: background lookup of insight text for a selected entity
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swapi_table::prelude::*;
//!
//! let config = ClientConfig::default().with_env_overrides()?;
//! let client = SwapiClient::new(&config)?;
//!
//! let people = ListController::mount(
//!     Arc::new(client.people()),
//!     ListOptions::from_config(&config),
//! );
//!
//! let mut updates = people.subscribe();
//! updates.wait_for(|state| !state.is_loading()).await?;
//!
//! people.handle_sort(SortColumn::Created);
//! people.set_page(2);
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, FetchError, FetchParams, Insight, InsightFetcher, ListFetcher, ListPage,
        ListResource, PageIndex, PaginationView, Person, Planet, Resource, SortColumn, SortOrder,
        page_indices, total_pages,
    };

    // === Controllers ===
    pub use crate::controller::{
        Debouncer, InsightPanel, InsightState, ListController, ListEvent, ListOptions,
        ListQueryState, Phase, SortIndicator, Transition,
    };

    // === Client ===
    pub use crate::client::{ResourceFetcher, SwapiClient};

    // === Config ===
    pub use crate::config::ClientConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
