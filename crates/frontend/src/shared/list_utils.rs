/// Search and paging helpers shared by the list pages

/// Trait for rows that can be matched against a search query
pub trait Searchable {
    /// Case-insensitive match; `query` is already lowercased and trimmed
    fn matches_query(&self, query: &str) -> bool;
}

/// Keeps rows matching `filter`; an empty filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let query = filter.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_query(&query))
        .cloned()
        .collect()
}

/// Case-insensitive containment, `query` already lowercased
pub fn contains_ci(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page buttons shown before collapsing into ellipses
pub const MAX_PAGE_BUTTONS: usize = 5;

/// One page of a list; pages are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageWindow {
    /// Clamps `page` into the valid range for `total`
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let mut window = Self {
            page,
            page_size,
            total,
        };
        window.page = page.clamp(1, window.total_pages().max(1));
        window
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// 1-based index of the first row shown, 0 when the list is empty
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn end_item(&self) -> usize {
        (self.page * self.page_size).min(self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Rows of the requested page after search and `keep`, with the clamped window
pub fn visible_page<T, F>(
    items: &[T],
    query: &str,
    keep: F,
    page: usize,
    page_size: usize,
) -> (Vec<T>, PageWindow)
where
    T: Searchable + Clone,
    F: Fn(&T) -> bool,
{
    let filtered: Vec<T> = filter_list(items, query)
        .into_iter()
        .filter(|item| keep(item))
        .collect();
    let window = PageWindow::new(page, page_size, filtered.len());
    (window.slice(&filtered).to_vec(), window)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons for `current` out of `total_pages`: first and last page always,
/// neighbours of `current` in between, ellipses for gaps.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total_pages - 1);
    if current <= 3 {
        end = 4;
    }
    if current + 2 >= total_pages {
        start = total_pages - 3;
    }

    let mut pages = vec![PageItem::Page(1)];
    if start > 2 {
        pages.push(PageItem::Ellipsis);
    }
    pages.extend((start..=end).map(PageItem::Page));
    if end < total_pages - 1 {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Page(total_pages));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_query(&self, query: &str) -> bool {
            contains_ci(self.0, query)
        }
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![Row("Kamera Sony"), Row("Tenda Dome"), Row("Lensa kamera")];
        assert_eq!(filter_list(&rows, "  KAMERA ").len(), 2);
        assert_eq!(filter_list(&rows, "").len(), 3);
        assert!(filter_list(&rows, "proyektor").is_empty());
    }

    #[test]
    fn test_page_window() {
        let window = PageWindow::new(3, 10, 25);
        assert_eq!(window.total_pages(), 3);
        assert_eq!((window.start_item(), window.end_item()), (21, 25));
        assert!(!window.has_next());

        let rows: Vec<usize> = (0..25).collect();
        assert_eq!(window.slice(&rows), &rows[20..25]);
    }

    #[test]
    fn test_page_window_clamps() {
        let window = PageWindow::new(9, 10, 25);
        assert_eq!(window.page, 3);

        let empty = PageWindow::new(1, 10, 0);
        assert_eq!((empty.start_item(), empty.end_item()), (0, 0));
        assert!(empty.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_visible_page_combines_search_filter_and_paging() {
        let rows: Vec<Row> = ["Kamera A", "Kamera B", "Tenda", "Kamera C"]
            .into_iter()
            .map(Row)
            .collect();
        let (page, window) = visible_page(&rows, "kamera", |r| r.0 != "Kamera B", 2, 1);
        assert_eq!(window.total, 2);
        assert_eq!(page, vec![Row("Kamera C")]);
    }

    #[test]
    fn test_page_numbers_small() {
        assert_eq!(page_numbers(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_page_numbers_with_ellipsis() {
        assert_eq!(
            page_numbers(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
