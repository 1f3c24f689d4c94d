//! Page slicing for list results

use serde::Serialize;

/// One page of a result list (1-indexed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Transform the items while keeping page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Slice `items` into the requested page
///
/// `page` and `page_size` of 0 are treated as 1. A page past the end is empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let slice = items
        .get(start..)
        .map(|rest| &rest[..rest.len().min(page_size)])
        .unwrap_or_default();

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    }
}
