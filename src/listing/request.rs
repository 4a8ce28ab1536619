//! Request-scoped view over the raw query-string parameters
//!
//! All pagination/filter/sort state is derived fresh from the incoming
//! request on every call; nothing here survives the request. Input-shape
//! problems (bad page number, disallowed perPage, unknown keys) are
//! normalized to safe defaults — they are never surfaced as errors.

use std::collections::HashMap;

use super::sort::SortDirection;

/// Page sizes a client may request; anything else falls back to the default
pub const ALLOWED_PAGE_SIZES: [u64; 6] = [10, 15, 20, 30, 50, 100];

/// Page size used when the request omits `perPage` or submits a disallowed one
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Query-string keys owned by the engine itself; everything else is
/// interpreted against the declared filter set
const RESERVED_KEYS: [&str; 5] = ["page", "perPage", "sort", "dir", "search"];

/// Normalized accessor over the raw query parameters of one list request
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    params: HashMap<String, String>,
}

impl ListRequest {
    pub fn from_params(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Requested page, 1-based. Missing, unparsable or zero/negative values
    /// resolve to 1. Clamping against the last page happens in the paginator
    /// once the total is known.
    pub fn page(&self) -> u64 {
        self.params
            .get("page")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Requested page size if it is in the allow-list, otherwise `default`
    pub fn per_page(&self, default: u64) -> u64 {
        self.params
            .get("perPage")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| ALLOWED_PAGE_SIZES.contains(v))
            .unwrap_or(default)
    }

    /// Requested sort key, if any
    pub fn sort(&self) -> Option<&str> {
        self.params
            .get("sort")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Requested sort direction, if valid
    pub fn direction(&self) -> Option<SortDirection> {
        self.params
            .get("dir")
            .and_then(|v| SortDirection::parse(v.trim()))
    }

    /// Trimmed quick-search term ("" when absent)
    pub fn search(&self) -> &str {
        self.params
            .get("search")
            .map(|v| v.trim())
            .unwrap_or("")
    }

    /// Submitted value for a declared filter key; empty values count as
    /// absent. Keys outside the declared set are never looked up, so unknown
    /// parameters are dropped by construction.
    pub fn filter_value(&self, key: &str) -> Option<&str> {
        debug_assert!(!RESERVED_KEYS.contains(&key));
        self.params
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn req(pairs: &[(&str, &str)]) -> ListRequest {
        ListRequest::from_params(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(req(&[]).page(), 1);
        assert_eq!(req(&[("page", "0")]).page(), 1);
        assert_eq!(req(&[("page", "-3")]).page(), 1);
        assert_eq!(req(&[("page", "abc")]).page(), 1);
        assert_eq!(req(&[("page", "7")]).page(), 7);
    }

    #[test]
    fn per_page_enforces_allow_list() {
        assert_eq!(req(&[]).per_page(DEFAULT_PER_PAGE), 15);
        assert_eq!(req(&[("perPage", "30")]).per_page(DEFAULT_PER_PAGE), 30);
        // 7 is not an allowed page size
        assert_eq!(req(&[("perPage", "7")]).per_page(DEFAULT_PER_PAGE), 15);
        assert_eq!(req(&[("perPage", "0")]).per_page(DEFAULT_PER_PAGE), 15);
        assert_eq!(req(&[("perPage", "muitos")]).per_page(DEFAULT_PER_PAGE), 15);
    }

    #[test]
    fn blank_filter_values_count_as_absent() {
        let r = req(&[("nome", "  "), ("uf", " sp ")]);
        assert_eq!(r.filter_value("nome"), None);
        assert_eq!(r.filter_value("uf"), Some("sp"));
        assert_eq!(r.filter_value("naoDeclarado"), None);
    }

    #[test]
    fn search_is_trimmed() {
        assert_eq!(req(&[("search", "  centro ")]).search(), "centro");
        assert_eq!(req(&[]).search(), "");
    }
}
