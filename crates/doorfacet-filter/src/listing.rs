use serde::Serialize;

/// One page of a result list. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing 1–12 of 40" style bounds; `None` for an empty page.
    pub fn span(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Plain slicing. Page 0 is read as page 1; a page past the end is empty; a
/// `page_size` of 0 puts everything on one page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let page = page.max(1);
    let page_size = if page_size == 0 { total.max(1) } else { page_size };
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    Page { items: items[start..end].to_vec(), page, page_size, total, total_pages }
}
