//! Page-number window for pagination controls
//!
//! Pure functions computing which page links to show around the current page.
//! The window always holds `min(total_pages, 2 * range + 1)` pages; page 1 and
//! the last page are pinned outside it, separated by an ellipsis whenever the
//! gap is wider than one page.

use serde::Serialize;

/// Half-width of the window around the current page
pub const PAGE_WINDOW_RANGE: usize = 2;

/// One element of a rendered pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Everything a pagination bar needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    pub current_page: usize,
    pub previous: Option<usize>,
    pub links: Vec<PageLink>,
    pub next: Option<usize>,
}

/// Compute the contiguous window of page numbers around `current_page`
///
/// Pages are 1-indexed. `current_page` is clamped into `1..=total_pages`.
/// Returns an empty vector when `total_pages` is 0.
pub fn page_window(current_page: usize, total_pages: usize, range: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let ahead = range.min(total_pages - current);
    let mut start = current.saturating_sub(range).max(1);
    let mut end = current + ahead;

    // Clipped at the front: move the missing pages to the back.
    if current <= range {
        end = end.saturating_add(range + 1 - current).min(total_pages);
    }

    // Clipped at the back: move the missing pages to the front.
    if ahead < range {
        start = start.saturating_sub(range - ahead).max(1);
    }

    (start..=end).collect()
}

/// Compute the full pagination bar for `current_page`
///
/// With a single page (or none) there is nothing to navigate, so `links` is
/// empty and both `previous` and `next` are `None`.
pub fn page_links(current_page: usize, total_pages: usize, range: usize) -> PageLinks {
    if total_pages <= 1 {
        return PageLinks {
            current_page: 1,
            previous: None,
            links: Vec::new(),
            next: None,
        };
    }

    let current = current_page.clamp(1, total_pages);
    let window = page_window(current, total_pages, range);
    let mut links = Vec::with_capacity(window.len() + 4);

    if let Some(&first) = window.first() {
        if first > 1 {
            links.push(PageLink::Page(1));
            if first > 2 {
                links.push(PageLink::Ellipsis);
            }
        }
    }

    links.extend(window.iter().copied().map(PageLink::Page));

    if let Some(&last) = window.last() {
        if last < total_pages {
            if last < total_pages - 1 {
                links.push(PageLink::Ellipsis);
            }
            links.push(PageLink::Page(total_pages));
        }
    }

    PageLinks {
        current_page: current,
        previous: (current > 1).then_some(current - 1),
        links,
        next: current.checked_add(1).filter(|next| *next <= total_pages),
    }
}

/// Number of pages needed for `total_items`, never less than one
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_window_middle() {
        assert_eq!(page_window(5, 10, 2), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_first_page_widens_forward() {
        assert_eq!(page_window(1, 10, 2), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10, 2), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_last_page_widens_backward() {
        assert_eq!(page_window(10, 10, 2), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 2), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_fewer_pages_than_width() {
        assert_eq!(page_window(2, 3, 2), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1, 2), vec![1]);
        assert!(page_window(1, 0, 2).is_empty());
    }

    #[test]
    fn test_window_clamps_out_of_range_page() {
        assert_eq!(page_window(0, 10, 2), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(99, 10, 2), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_links_middle_has_both_pins() {
        let bar = page_links(5, 10, PAGE_WINDOW_RANGE);
        assert_eq!(
            bar.links,
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
        assert_eq!(bar.previous, Some(4));
        assert_eq!(bar.next, Some(6));
    }

    #[test]
    fn test_links_first_page() {
        let bar = page_links(1, 10, PAGE_WINDOW_RANGE);
        assert_eq!(
            bar.links,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(bar.previous, None);
        assert_eq!(bar.next, Some(2));
    }

    #[test]
    fn test_links_no_ellipsis_for_adjacent_pin() {
        // Window 2..=6 touches page 1, and 7 is adjacent to 6.
        let bar = page_links(4, 7, PAGE_WINDOW_RANGE);
        assert_eq!(
            bar.links,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_links_single_page_is_empty() {
        let bar = page_links(1, 1, PAGE_WINDOW_RANGE);
        assert!(bar.links.is_empty());
        assert_eq!(bar.previous, None);
        assert_eq!(bar.next, None);
    }

    #[test]
    fn test_links_last_page() {
        let bar = page_links(10, 10, PAGE_WINDOW_RANGE);
        assert_eq!(
            bar.links,
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(bar.next, None);
    }

    #[test]
    fn test_total_pages_never_zero() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1126, 20), 57);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_window_at_largest_page_count() {
        let max = usize::MAX;
        assert_eq!(
            page_window(max, max, PAGE_WINDOW_RANGE),
            vec![max - 4, max - 3, max - 2, max - 1, max]
        );

        let bar = page_links(max, max, PAGE_WINDOW_RANGE);
        assert_eq!(bar.next, None);
        assert_eq!(bar.previous, Some(max - 1));
    }
}
