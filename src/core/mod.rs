//! Core module containing listing types, contracts and pagination math

pub mod error;
pub mod fetcher;
pub mod pagination;
pub mod query;
pub mod resource;

pub use error::{ConfigError, FetchError};
pub use fetcher::{Insight, InsightFetcher, ListFetcher};
pub use pagination::{PageIndex, PaginationView, page_indices, total_pages};
pub use query::{FetchParams, ListPage, SortColumn, SortOrder};
pub use resource::{ListResource, Person, Planet, Resource};
