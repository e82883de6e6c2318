//! Stateless pagination shared by every list view.

use serde::Serialize;

/// Page size used when the client does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Largest page size a client may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// How many neighbours of the current page are always listed.
const PAGE_WINDOW: usize = 2;

/// One entry of the page selector rendered under a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// A single page cut out of a larger collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based index of this page.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    /// `0` when the collection is empty.
    pub total_pages: usize,
    /// Compressed selector labels for this page.
    pub pages: Vec<PageLabel>,
}

impl<T> Page<T> {
    /// Convert the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            pages: self.pages,
        }
    }
}

/// Requested page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_ITEMS_PER_PAGE),
        }
    }

    /// Change the page size. Always goes back to the first page.
    pub fn with_page_size(self, per_page: usize) -> Self {
        Self::new(1, per_page)
    }

    /// Build a request from query parameters. A request whose page size
    /// differs from `previous_per_page` is treated as a page size change.
    pub fn from_params(
        page: Option<usize>,
        per_page: Option<usize>,
        previous_per_page: Option<usize>,
    ) -> Self {
        let base = Self::new(page.unwrap_or(1), DEFAULT_ITEMS_PER_PAGE);

        match (per_page, previous_per_page) {
            (Some(size), Some(previous)) if size != previous => base.with_page_size(size),
            (Some(size), _) => Self::new(base.page, size),
            (None, _) => base,
        }
    }
}

/// Cut `items` into the requested page. Out-of-range pages are clamped to
/// the nearest valid page; an empty collection yields an empty first page.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let items: Vec<T> = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
        pages: page_labels(page, total_pages),
    }
}

/// Paginate according to a [`PageRequest`].
pub fn paginate_request<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    paginate(items, request.page, request.per_page)
}

/// First and last page plus every page within two of `current`, with an
/// ellipsis standing in for each gap.
pub fn page_labels(current: usize, total_pages: usize) -> Vec<PageLabel> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let mut labels = Vec::new();

    for page in 1..=total {
        if page == 1 || page == total || page.abs_diff(current) <= PAGE_WINDOW {
            labels.push(PageLabel::Page(page));
        } else if labels.last() != Some(&PageLabel::Ellipsis) {
            labels.push(PageLabel::Ellipsis);
        }
    }

    labels
}
