//! Declarative search filters
//!
//! A [`FilterDescriptor`] carries no logic of its own: it names a
//! query-string key, the entity column it targets and how submitted values
//! compare against that column. The paginator turns active descriptors into
//! parameterized predicates; raw values never reach the SQL text.

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, IntoSimpleExpr, Value};

/// Widget rendered for the filter on the client side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterWidget {
    /// Free-text input
    Text,
    /// Fixed option list
    Select,
    /// Date picker (values submitted as `YYYY-MM-DD`)
    Date,
    /// Checkbox / tri-state toggle
    Boolean,
}

/// Comparison applied between the target column and the submitted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Case-insensitive substring containment
    Contains,
    /// Equality
    Equals,
    /// Greater-or-equal (lower bound of a range pair)
    Gte,
    /// Less-or-equal (upper bound of a range pair)
    Lte,
}

/// How the raw query-string value is coerced before binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindKind {
    Text,
    Integer,
    Date,
    Boolean,
}

/// One entry of a select filter's option list
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Declarative description of one searchable field.
///
/// Two descriptors may target the same column (e.g. `vencimentoDe` with
/// [`FilterOperator::Gte`] and `vencimentoAte` with [`FilterOperator::Lte`]);
/// when both are submitted the predicates compose conjunctively, forming an
/// inclusive range.
#[derive(Debug, Clone)]
pub struct FilterDescriptor<C> {
    /// Stable query-string key
    pub key: &'static str,
    /// Display label for the rendered control
    pub label: &'static str,
    pub widget: FilterWidget,
    /// Target entity column
    pub target: C,
    pub operator: FilterOperator,
    /// Option list, only meaningful for [`FilterWidget::Select`]
    pub options: Vec<SelectOption>,
    /// Optional hint text
    pub placeholder: Option<&'static str>,
    /// Relative width hint for rendering, no behavioral effect
    pub layout_weight: u8,
    bind: BindKind,
}

impl<C: ColumnTrait> FilterDescriptor<C> {
    fn base(
        key: &'static str,
        label: &'static str,
        widget: FilterWidget,
        target: C,
        operator: FilterOperator,
        bind: BindKind,
    ) -> Self {
        Self {
            key,
            label,
            widget,
            target,
            operator,
            options: Vec::new(),
            placeholder: None,
            layout_weight: 2,
            bind,
        }
    }

    /// Free-text filter, case-insensitive containment
    pub fn text(key: &'static str, label: &'static str, target: C) -> Self {
        Self::base(
            key,
            label,
            FilterWidget::Text,
            target,
            FilterOperator::Contains,
            BindKind::Text,
        )
    }

    /// Select filter over string-valued columns (status enums etc.)
    pub fn select(
        key: &'static str,
        label: &'static str,
        target: C,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut f = Self::base(
            key,
            label,
            FilterWidget::Select,
            target,
            FilterOperator::Equals,
            BindKind::Text,
        );
        f.options = options;
        f
    }

    /// Select filter over integer-valued columns (foreign keys); option lists
    /// for these are loaded from the referenced table by the client
    pub fn select_id(key: &'static str, label: &'static str, target: C) -> Self {
        Self::base(
            key,
            label,
            FilterWidget::Select,
            target,
            FilterOperator::Equals,
            BindKind::Integer,
        )
    }

    /// Lower bound of an inclusive date range
    pub fn date_from(key: &'static str, label: &'static str, target: C) -> Self {
        Self::base(
            key,
            label,
            FilterWidget::Date,
            target,
            FilterOperator::Gte,
            BindKind::Date,
        )
    }

    /// Upper bound of an inclusive date range
    pub fn date_to(key: &'static str, label: &'static str, target: C) -> Self {
        Self::base(
            key,
            label,
            FilterWidget::Date,
            target,
            FilterOperator::Lte,
            BindKind::Date,
        )
    }

    /// Boolean filter (`1`/`true`/`0`/`false`)
    pub fn boolean(key: &'static str, label: &'static str, target: C) -> Self {
        Self::base(
            key,
            label,
            FilterWidget::Boolean,
            target,
            FilterOperator::Equals,
            BindKind::Boolean,
        )
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_weight(mut self, weight: u8) -> Self {
        self.layout_weight = weight;
        self
    }

    /// Build the parameterized predicate for a submitted value.
    ///
    /// Returns `None` when the value does not coerce to the expected type;
    /// the caller then skips the filter instead of failing the request.
    pub(crate) fn predicate(&self, raw: &str) -> Option<SimpleExpr> {
        match self.bind {
            BindKind::Text => match self.operator {
                FilterOperator::Contains => Some(ci_contains(self.target, raw)),
                _ => Some(self.compare(raw)),
            },
            BindKind::Integer => {
                let value: i64 = raw.parse().ok()?;
                Some(self.compare(value))
            }
            BindKind::Date => {
                let value = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
                Some(self.compare(value))
            }
            BindKind::Boolean => {
                let value = parse_bool(raw)?;
                Some(self.compare(value))
            }
        }
    }

    fn compare<V: Into<Value>>(&self, value: V) -> SimpleExpr {
        match self.operator {
            // Contains over non-text binds degrades to equality
            FilterOperator::Contains | FilterOperator::Equals => self.target.eq(value),
            FilterOperator::Gte => self.target.gte(value),
            FilterOperator::Lte => self.target.lte(value),
        }
    }
}

/// `LOWER(col) LIKE LOWER('%value%')` — case-insensitive containment with the
/// pattern bound as a parameter
pub(crate) fn ci_contains<C: ColumnTrait>(col: C, value: &str) -> SimpleExpr {
    let pattern = format!("%{}%", value.to_lowercase());
    Expr::expr(Func::lower(col.into_simple_expr())).like(pattern)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::boleto;

    #[test]
    fn malformed_date_is_skipped() {
        let f = FilterDescriptor::date_from("vencimentoDe", "Venc. De", boleto::Column::DataVencimento);
        assert!(f.predicate("not-a-date").is_none());
        assert!(f.predicate("2024-01-01").is_some());
    }

    #[test]
    fn malformed_bool_is_skipped() {
        let f = FilterDescriptor::boolean("ativo", "Ativo", boleto::Column::Id);
        assert!(f.predicate("maybe").is_none());
        assert!(f.predicate("true").is_some());
        assert!(f.predicate("0").is_some());
    }

    #[test]
    fn malformed_id_is_skipped() {
        let f = FilterDescriptor::select_id("contratoId", "Contrato", boleto::Column::ContratoId);
        assert!(f.predicate("abc").is_none());
        assert!(f.predicate("42").is_some());
    }
}
