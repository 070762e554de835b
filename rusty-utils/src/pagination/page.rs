//! Pure pagination math over zero-based page indices.

use rusty_core::ButtonRole;

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a zero-based page index into `0..total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Page a navigation button leads to from `current_page`.
pub fn target_page(role: ButtonRole, current_page: usize, total_pages: usize) -> usize {
    let current_page = clamp_page(current_page, total_pages);
    match role {
        ButtonRole::JumpToFirstPage => 0,
        ButtonRole::PreviousPage => current_page.saturating_sub(1),
        ButtonRole::NextPage => clamp_page(current_page + 1, total_pages),
        ButtonRole::JumpToLastPage => total_pages.saturating_sub(1),
    }
}

/// Parse a one-based page argument into a zero-based index.
///
/// A missing argument means the first page; `0` or garbage is `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|page| page.checked_sub(1)),
        None => Some(0),
    }
}
