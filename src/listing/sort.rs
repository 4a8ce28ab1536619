//! Declarative sort options

use sea_orm::Order;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse `asc`/`desc` in any casing; anything else is rejected
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl From<SortDirection> for Order {
    fn from(dir: SortDirection) -> Self {
        match dir {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Declarative description of one sortable field.
///
/// The active sort is exactly one descriptor's key plus a direction; a
/// requested key outside the declared set makes the paginator fall back to
/// the table default instead of failing.
#[derive(Debug, Clone)]
pub struct SortDescriptor<C> {
    /// Stable query-string key
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Target entity column
    pub target: C,
    /// Direction used when the request does not override it
    pub default_direction: SortDirection,
}

impl<C> SortDescriptor<C> {
    pub fn asc(key: &'static str, label: &'static str, target: C) -> Self {
        Self {
            key,
            label,
            target,
            default_direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: &'static str, label: &'static str, target: C) -> Self {
        Self {
            key,
            label,
            target,
            default_direction: SortDirection::Desc,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_any_casing() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("Desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }
}
