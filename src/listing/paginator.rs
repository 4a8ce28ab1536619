//! Paginator: applies filters, sort and bounds to a base query scope and
//! assembles the result envelope.
//!
//! The engine runs exactly two statements per call: a COUNT over the filtered
//! scope (no ordering, no bounds) and the bounded SELECT. Store errors
//! propagate unmodified — no retry, no partial result.

use std::collections::BTreeMap;

use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use sea_orm::sea_query::Condition;

use super::filter::{ci_contains, FilterDescriptor};
use super::request::{ListRequest, DEFAULT_PER_PAGE};
use super::sort::{SortDescriptor, SortDirection};

/// Per-table listing declaration: which fields are filterable and sortable,
/// what the default ordering is, and which columns the quick-search box
/// OR-matches across.
pub struct ListDefinition<E: EntityTrait> {
    filters: Vec<FilterDescriptor<E::Column>>,
    sorts: Vec<SortDescriptor<E::Column>>,
    default_sort: (E::Column, SortDirection),
    quick_search: Vec<E::Column>,
    default_per_page: u64,
}

impl<E: EntityTrait> ListDefinition<E> {
    pub fn new(default_sort_target: E::Column, default_direction: SortDirection) -> Self {
        Self {
            filters: Vec::new(),
            sorts: Vec::new(),
            default_sort: (default_sort_target, default_direction),
            quick_search: Vec::new(),
            default_per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_filters(mut self, filters: Vec<FilterDescriptor<E::Column>>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sorts(mut self, sorts: Vec<SortDescriptor<E::Column>>) -> Self {
        self.sorts = sorts;
        self
    }

    pub fn with_quick_search(mut self, columns: Vec<E::Column>) -> Self {
        self.quick_search = columns;
        self
    }

    pub fn with_default_per_page(mut self, per_page: u64) -> Self {
        self.default_per_page = per_page;
        self
    }

    /// Resolve the active sort. A requested key outside the declared set
    /// behaves exactly as if `sort` had been omitted: table default field and
    /// direction, echoed key left empty.
    fn resolve_sort(&self, req: &ListRequest) -> (E::Column, SortDirection, String) {
        if let Some(key) = req.sort() {
            if let Some(decl) = self.sorts.iter().find(|s| s.key == key) {
                let dir = req.direction().unwrap_or(decl.default_direction);
                return (decl.target, dir, decl.key.to_string());
            }
        }
        let (target, dir) = self.default_sort;
        (target, dir, String::new())
    }
}

/// Result envelope of one bounded list query.
///
/// Echoes the effective filter/sort state so list controls can re-render
/// their current selection; an empty `sort` means the table default ordering
/// was applied.
#[derive(Debug)]
pub struct Page<M> {
    pub items: Vec<M>,
    /// Count matching all active filters, ignoring page bounds
    pub total_items: u64,
    /// 1-based, already clamped to `[1, total_pages]`
    pub current_page: u64,
    /// Always a member of the allow-list (or the configured default)
    pub per_page: u64,
    /// `max(1, ceil(total_items / per_page))` — an empty result is page 1 of 1
    pub total_pages: u64,
    pub sort: String,
    pub dir: SortDirection,
    pub search: String,
    /// Submitted value per declared filter key ("" when absent)
    pub filters: BTreeMap<String, String>,
}

/// Run one paginated list query against `base`.
///
/// `base` is the unfiltered, unsorted scope for the entity (joins and fixed
/// predicates the endpoint always applies may already be present). Unknown
/// query keys are ignored; malformed filter values skip their filter;
/// unknown sort keys fall back to the declared default.
pub async fn paginate<C, E>(
    db: &C,
    base: Select<E>,
    def: &ListDefinition<E>,
    req: &ListRequest,
) -> Result<Page<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync,
{
    let mut condition = Condition::all();

    // Quick search: one term OR-matched across the declared columns
    let search = req.search().to_string();
    if !search.is_empty() && !def.quick_search.is_empty() {
        let mut any = Condition::any();
        for col in &def.quick_search {
            any = any.add(ci_contains(*col, &search));
        }
        condition = condition.add(any);
    }

    // Declared filters; range pairs over the same column compose conjunctively
    let mut active_filters = BTreeMap::new();
    for filter in &def.filters {
        match req.filter_value(filter.key) {
            Some(raw) => {
                if let Some(predicate) = filter.predicate(raw) {
                    condition = condition.add(predicate);
                }
                active_filters.insert(filter.key.to_string(), raw.to_string());
            }
            None => {
                active_filters.insert(filter.key.to_string(), String::new());
            }
        }
    }

    let filtered = base.filter(condition);

    // Sibling count query: same filter set, no ordering, no bounds
    let total_items = filtered.clone().count(db).await?;

    let per_page = req.per_page(def.default_per_page);
    let total_pages = (total_items.div_ceil(per_page)).max(1);
    let current_page = req.page().min(total_pages);

    let (sort_target, dir, sort_key) = def.resolve_sort(req);

    let items = filtered
        .order_by(sort_target, dir.into())
        .offset((current_page - 1) * per_page)
        .limit(per_page)
        .all(db)
        .await?;

    Ok(Page {
        items,
        total_items,
        current_page,
        per_page,
        total_pages,
        sort: sort_key,
        dir,
        search,
        filters: active_filters,
    })
}
