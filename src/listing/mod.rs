//! Shared listing engine
//!
//! Nearly every index endpoint of the back office is the same shape: a set of
//! declarative search filters, a set of sortable fields, a page/perPage pair
//! and a result envelope that echoes the submitted state back so the client
//! can re-render its controls. This module centralizes that shape so the
//! per-entity handlers only declare *what* is filterable/sortable.
//!
//! - [`FilterDescriptor`] — one searchable field (widget, target column,
//!   comparison operator)
//! - [`SortDescriptor`] — one sortable field with a default direction
//! - [`ListRequest`] — normalized view over the raw query-string parameters
//! - [`paginate`] — applies filters + sort + bounds and assembles a [`Page`]

pub mod filter;
pub mod paginator;
pub mod request;
pub mod sort;

pub use filter::{FilterDescriptor, FilterOperator, FilterWidget, SelectOption};
pub use paginator::{paginate, ListDefinition, Page};
pub use request::{ListRequest, ALLOWED_PAGE_SIZES, DEFAULT_PER_PAGE};
pub use sort::{SortDescriptor, SortDirection};
