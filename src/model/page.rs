//! Pagination metadata cached alongside each collection.

/// Store-side view of a paginated response's metadata.
///
/// Replaced wholesale on every successful list fetch; the initial value
/// is the empty first page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            total_elements: 0,
            total_pages: 0,
            current_page: 0,
            page_size: 20,
            has_next: false,
            has_previous: false,
        }
    }
}
