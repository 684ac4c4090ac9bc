//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_item--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Account pages (profile).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Public pages outside the shell (landing, login, register).
pub const PAGE_CAT_PUBLIC: &str = "public";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_PUBLIC,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_item--list"));
        assert!(!is_valid_page_id("a002_item"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_item--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("usecase"));
    }
}
