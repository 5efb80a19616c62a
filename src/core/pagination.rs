//! Pagination math for listing navigation controls

use serde::Serialize;
use std::fmt;

/// Pages always shown at the start of the navigation
const LEADING_PAGES: usize = 3;

/// Pages always shown at the end of the navigation
const TRAILING_PAGES: usize = 2;

/// Pages shown on each side of the current page
const NEIGHBOURS: usize = 1;

/// One navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageIndex {
    /// A clickable page number
    Page(usize),
    /// A collapsed run of skipped pages
    Ellipsis,
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageIndex::Page(n) => write!(f, "{}", n),
            PageIndex::Ellipsis => f.write_str("…"),
        }
    }
}

/// Number of pages needed to show `total` records
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 {
        return 0;
    }
    total.div_ceil(page_size.max(1))
}

/// Page index list for the navigation controls
///
/// Pages 1 to 3, the last two pages and the neighbours of `page` are kept;
/// every other run of pages collapses into a single [`PageIndex::Ellipsis`].
pub fn page_indices(page: usize, total: usize, page_size: usize) -> Vec<PageIndex> {
    let last = total_pages(total, page_size);
    if last == 0 {
        return Vec::new();
    }

    let leading = 1..=LEADING_PAGES.min(last);
    let near = page.saturating_sub(NEIGHBOURS).max(1)..=page.saturating_add(NEIGHBOURS).min(last);
    let trailing = last.saturating_sub(TRAILING_PAGES - 1).max(1)..=last;

    let mut kept: Vec<usize> = leading.chain(near).chain(trailing).collect();
    kept.sort_unstable();
    kept.dedup();

    let mut indices = Vec::with_capacity(kept.len() * 2);
    let mut previous = 0;
    for i in kept {
        if i > previous + 1 {
            indices.push(PageIndex::Ellipsis);
        }
        indices.push(PageIndex::Page(i));
        previous = i;
    }

    indices
}

/// Everything a pagination bar needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of records per page
    pub page_size: usize,

    /// Total number of records
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether the "previous" control is enabled
    pub has_prev: bool,

    /// Whether the "next" control is enabled
    pub has_next: bool,

    /// 1-based position of the first record shown, 0 when empty
    pub first_item: usize,

    /// 1-based position of the last record shown, 0 when empty
    pub last_item: usize,

    /// Page number controls
    pub indices: Vec<PageIndex>,
}

impl PaginationView {
    pub fn new(page: usize, total: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);
        let (first_item, last_item) = if total == 0 {
            (0, 0)
        } else {
            let first = (page - 1).saturating_mul(page_size).saturating_add(1);
            (first.min(total), page.saturating_mul(page_size).min(total))
        };

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
            first_item,
            last_item,
            indices: page_indices(page, total, page_size),
        }
    }

    /// Target of the "previous" control
    pub fn prev_page(&self) -> Option<usize> {
        self.has_prev.then(|| self.page - 1)
    }

    /// Target of the "next" control
    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then(|| self.page + 1)
    }

    /// "Showing X to Y of Z results"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_item, self.last_item, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageIndex::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(1, 15), 1);
        assert_eq!(total_pages(15, 15), 1);
        assert_eq!(total_pages(16, 15), 2);
        assert_eq!(total_pages(42, 15), 3);
        assert_eq!(total_pages(300, 15), 20);
    }

    #[test]
    fn test_small_listing_has_no_ellipsis() {
        assert_eq!(page_indices(2, 42, 15), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_middle_page_collapses_both_sides() {
        assert_eq!(
            page_indices(10, 300, 15),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Ellipsis,
                Page(9),
                Page(10),
                Page(11),
                Ellipsis,
                Page(19),
                Page(20),
            ]
        );
    }

    #[test]
    fn test_first_page_collapses_tail() {
        assert_eq!(
            page_indices(1, 300, 15),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(19), Page(20)]
        );
    }

    #[test]
    fn test_neighbour_adjacent_to_leading_pages() {
        assert_eq!(
            page_indices(4, 150, 15),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(9),
                Page(10),
            ]
        );
    }

    #[test]
    fn test_never_two_consecutive_ellipses() {
        for total in [0, 1, 15, 46, 150, 301, 1000] {
            for page in 1..=total_pages(total, 15).max(1) {
                let indices = page_indices(page, total, 15);
                assert!(
                    indices.windows(2).all(|w| w != [Ellipsis, Ellipsis]),
                    "double ellipsis for page {} of total {}",
                    page,
                    total
                );
            }
        }
    }

    #[test]
    fn test_empty_listing() {
        let view = PaginationView::new(1, 0, 15);
        assert_eq!(view.total_pages, 0);
        assert!(view.indices.is_empty());
        assert!(!view.has_prev);
        assert!(!view.has_next);
        assert_eq!(view.summary(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn test_view_edges() {
        let first = PaginationView::new(1, 42, 15);
        assert_eq!(first.prev_page(), None);
        assert_eq!(first.next_page(), Some(2));
        assert_eq!((first.first_item, first.last_item), (1, 15));

        let last = PaginationView::new(3, 42, 15);
        assert_eq!(last.prev_page(), Some(2));
        assert_eq!(last.next_page(), None);
        assert_eq!(last.summary(), "Showing 31 to 42 of 42 results");
    }

    #[test]
    fn test_far_page_out_of_range() {
        let view = PaginationView::new(usize::MAX, 42, 15);
        assert_eq!((view.first_item, view.last_item), (42, 42));
        assert_eq!(view.prev_page(), Some(usize::MAX - 1));
        assert_eq!(view.next_page(), None);
        assert_eq!(view.indices, vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_huge_total_stays_small() {
        let indices = page_indices(500_000, usize::MAX, 1);
        assert_eq!(
            indices,
            vec![
                Page(1),
                Page(2),
                Page(3),
                Ellipsis,
                Page(499_999),
                Page(500_000),
                Page(500_001),
                Ellipsis,
                Page(usize::MAX - 1),
                Page(usize::MAX),
            ]
        );
    }

    #[test]
    fn test_matches_page_by_page_rule() {
        for total in [1, 15, 46, 150, 301, 1000] {
            let last = total_pages(total, 15);
            for page in 1..=last {
                let mut expected = Vec::new();
                for i in 1..=last {
                    if i <= 3 || i + 2 > last || page.abs_diff(i) <= 1 {
                        expected.push(Page(i));
                    } else if expected.last() != Some(&Ellipsis) {
                        expected.push(Ellipsis);
                    }
                }
                assert_eq!(
                    page_indices(page, total, 15),
                    expected,
                    "page {} of total {}",
                    page,
                    total
                );
            }
        }
    }

    #[test]
    fn test_ellipsis_display() {
        let rendered: Vec<String> = page_indices(10, 300, 15)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered[3], "…");
        assert_eq!(rendered[5], "10");
    }
}
