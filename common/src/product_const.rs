//! Fixed settings of the product admin pages.

/// Rows per table page. Not user-configurable.
pub const PAGE_SIZE: u64 = 50;

/// Page numbers shown around the current one in the pager.
pub const PAGER_WINDOW: u64 = 5;

pub const QUERY_SEARCH_TYPE: &str = "searchType";
pub const QUERY_SEARCH_TEXT: &str = "searchText";
pub const QUERY_PAGE: &str = "page";

/// Unit suffix for counts ("건").
pub const COUNT_UNIT: &str = "건";

pub fn selected_count_label(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("{}{} 선택", count, COUNT_UNIT)
    }
}
