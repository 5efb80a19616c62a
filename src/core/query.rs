//! Listing query parameters and the paginated response body

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Created,
}

impl SortColumn {
    /// Value sent as the `sort_by` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Created => "created",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Value sent as the `order` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the listing state needed to reproduce one request
///
/// Serialized into the query string of the list endpoint:
///
/// ```text
/// GET /people?page=2&search=sky&sort_by=name&order=desc
/// GET /planets?page=1&sort_by=created&order=asc
/// ```
///
/// An empty search is left out of the query string entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchParams {
    /// Page number (starts at 1)
    pub page: usize,

    /// Trimmed search text, possibly empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,

    /// Sort field
    pub sort_by: SortColumn,

    /// Sort direction
    pub order: SortOrder,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            sort_by: SortColumn::default(),
            order: SortOrder::default(),
        }
    }
}

impl FetchParams {
    /// Query string pairs in request order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string())];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs
    }
}

/// Paginated response body of the list endpoints
///
/// Only `count` and `results` drive listing state; `next` and `previous`
/// are kept for callers that want to follow links directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    /// Total number of matching records across all pages
    pub count: usize,

    /// Link to the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    /// Link to the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,

    /// Records on this page
    pub results: Vec<T>,
}

impl<T> ListPage<T> {
    /// A page with no records and a zero count
    pub fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_query_pairs_omit_empty_search() {
        let params = FetchParams::default();
        assert_eq!(
            params.query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("sort_by", "name".to_string()),
                ("order", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_with_search() {
        let params = FetchParams {
            page: 3,
            search: "sky".to_string(),
            sort_by: SortColumn::Created,
            order: SortOrder::Descending,
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("page", "3".to_string()),
                ("search", "sky".to_string()),
                ("sort_by", "created".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_serialize_like_query_pairs() {
        let params = FetchParams::default();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({ "page": 1, "sort_by": "name", "order": "asc" }));
    }

    #[test]
    fn test_list_page_ignores_missing_links() {
        let page: ListPage<serde_json::Value> =
            serde_json::from_value(json!({ "count": 2, "results": [{}, {}] })).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 2);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_list_page_requires_count() {
        let page = serde_json::from_value::<ListPage<serde_json::Value>>(json!({ "results": [] }));
        assert!(page.is_err());
    }
}
