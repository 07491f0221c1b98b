use crate::error::DataError;
use crate::source::QueryableSource;
use serde::{Deserialize, Serialize};

/// Pagination parameters as a caller supplies them, e.g. from query params.
///
/// Values are carried as given. Nothing here rejects a zero or negative page
/// or size; see [`PagedList::create`] for how those are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

pub(crate) fn default_page() -> i64 {
    1
}

pub(crate) fn default_page_size() -> i64 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_page_size(),
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Number of items preceding this page, saturated into `i64`.
    pub fn offset(&self) -> i64 {
        let skip = (i128::from(self.page) - 1) * i128::from(self.size);
        i64::try_from(skip).unwrap_or(if skip < 0 { i64::MIN } else { i64::MAX })
    }
}

/// The window a page request maps onto, normalized for the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    offset: u64,
    limit: u64,
}

impl Window {
    // Skipping a negative count skips nothing; taking a non-positive count takes nothing.
    fn new(page_number: i64, page_size: i64) -> Self {
        let skip = PageRequest::new(page_number, page_size).offset();
        let offset = u64::try_from(skip.max(0)).unwrap_or(0);
        let limit = u64::try_from(page_size.max(0)).unwrap_or(0);
        Self { offset, limit }
    }
}

/// One page of an ordered source, with navigation metadata.
///
/// A `PagedList` is a snapshot: it owns its items and never changes after
/// [`PagedList::create`] returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    items: Vec<T>,
    page_number: i64,
    page_size: i64,
    total_count: u64,
    has_previous_page: bool,
    has_next_page: bool,
}

impl<T> PagedList<T> {
    /// Read the total count from `source`, then the window for
    /// `page_number` / `page_size`, and assemble the page.
    ///
    /// `page_number` is 1-based. Neither argument is validated:
    ///
    /// - a non-positive `page_size` yields no items, and `has_next_page`
    ///   is still the literal `page_number * page_size < total_count`;
    /// - a page past the end yields no items and no next page;
    /// - a non-positive `page_number` starts the window at offset 0.
    ///
    /// Fails only when the source does, with the source's error unchanged.
    /// The two reads are not isolated from each other; a source mutated in
    /// between may produce a count that disagrees with the items.
    ///
    /// # Example
    ///
    /// ```
    /// use pagelist::PagedList;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let posts = vec!["a", "b", "c", "d", "e"];
    /// let page = PagedList::create(&posts, 2, 2).await.unwrap();
    /// assert_eq!(page.items(), &["c", "d"]);
    /// assert!(page.has_previous_page());
    /// assert!(page.has_next_page());
    /// # }
    /// ```
    pub async fn create<S>(source: &S, page_number: i64, page_size: i64) -> Result<Self, DataError>
    where
        S: QueryableSource<Item = T> + ?Sized,
    {
        let total_count = source.count().await?;
        let window = Window::new(page_number, page_size);
        let mut items = source.range_at(window.offset, window.limit).await?;
        // A page never holds more than its size, whatever the source returned.
        items.truncate(usize::try_from(window.limit).unwrap_or(usize::MAX));

        let has_previous_page = page_number > 1;
        let has_next_page =
            i128::from(page_number) * i128::from(page_size) < i128::from(total_count);

        tracing::debug!(
            page_number,
            page_size,
            total_count,
            items = items.len(),
            has_previous_page,
            has_next_page,
            "built page"
        );

        Ok(Self {
            items,
            page_number,
            page_size,
            total_count,
            has_previous_page,
            has_next_page,
        })
    }

    /// Same as [`PagedList::create`], taking the page and size from `request`.
    pub async fn from_request<S>(source: &S, request: &PageRequest) -> Result<Self, DataError>
    where
        S: QueryableSource<Item = T> + ?Sized,
    {
        Self::create(source, request.page, request.size).await
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Number of pages needed to hold `total_count` items, or 0 when the
    /// page size is not positive.
    pub fn total_pages(&self) -> u64 {
        match u64::try_from(self.page_size) {
            Ok(size) if size > 0 => self.total_count.div_ceil(size),
            _ => 0,
        }
    }

    /// Convert every item, keeping the page metadata as is.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_first_page() {
        assert_eq!(Window::new(1, 15), Window { offset: 0, limit: 15 });
    }

    #[test]
    fn test_window_later_page() {
        assert_eq!(Window::new(3, 30), Window { offset: 60, limit: 30 });
    }

    #[test]
    fn test_window_negative_size_takes_nothing() {
        assert_eq!(Window::new(1, -15), Window { offset: 0, limit: 0 });
        assert_eq!(Window::new(3, -15), Window { offset: 0, limit: 0 });
    }

    #[test]
    fn test_window_non_positive_page_starts_at_zero() {
        assert_eq!(Window::new(0, 10), Window { offset: 0, limit: 10 });
        assert_eq!(Window::new(-4, 10), Window { offset: 0, limit: 10 });
    }

    #[test]
    fn test_window_extremes_do_not_overflow() {
        let w = Window::new(i64::MAX, i64::MAX);
        assert_eq!(w.offset, i64::MAX as u64);
        assert_eq!(w.limit, i64::MAX as u64);
        assert_eq!(Window::new(i64::MIN, i64::MIN).limit, 0);
    }

    #[test]
    fn test_window_offset_is_request_offset() {
        for (page, size) in [(1, 10), (4, 25), (0, 7), (-2, 3), (9, -5)] {
            let expected = PageRequest::new(page, size).offset().max(0) as u64;
            assert_eq!(Window::new(page, size).offset, expected);
        }
    }

    #[test]
    fn test_page_request_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.size, 20);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
        assert_eq!(PageRequest::new(0, 25).offset(), -25);
        assert_eq!(PageRequest::new(i64::MAX, i64::MAX).offset(), i64::MAX);
        assert_eq!(PageRequest::new(i64::MIN, i64::MAX).offset(), i64::MIN);
    }

    #[test]
    fn test_total_pages() {
        let page = PagedList {
            items: Vec::<u8>::new(),
            page_number: 1,
            page_size: 30,
            total_count: 100,
            has_previous_page: false,
            has_next_page: true,
        };
        assert_eq!(page.total_pages(), 4);

        let page = PagedList { page_size: -30, ..page };
        assert_eq!(page.total_pages(), 0);
    }
}
