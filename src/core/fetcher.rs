//! Fetcher contracts consumed by the controllers
//!
//! The controllers never talk HTTP themselves. They are handed a fetcher and
//! only rely on the shapes below, which makes them testable with in-memory
//! fakes and lets one HTTP adapter serve every resource.

use crate::core::error::FetchError;
use crate::core::query::{FetchParams, ListPage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fetches one page of a listing
///
/// Implementations apply `search`, `sort_by` and `order` remotely and return
/// at most one page of records together with the total match count. Any
/// failure (network, non-2xx status, malformed body) is reported as a
/// [`FetchError`]; callers handle them uniformly.
#[async_trait]
pub trait ListFetcher<T>: Send + Sync {
    async fn fetch_list(&self, params: &FetchParams) -> Result<ListPage<T>, FetchError>;
}

/// Supplementary insight text about a named entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub description: String,
}

/// Fetches insight text for the modal panel
#[async_trait]
pub trait InsightFetcher: Send + Sync {
    async fn fetch_insight(&self, name: &str) -> Result<Insight, FetchError>;
}
