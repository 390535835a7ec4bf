//! Filtered list query construction.
//!
//! A [`FilteredQuery`] holds a base select, its optional grouping and the
//! predicates contributed by one filter parameter set. The count statement
//! and the page statement are both rendered from the same filtered statement,
//! so they always filter identically.
//!
//! Every value reaches the database as a bound parameter; only fixed column
//! names and SQL keywords are ever written into the statement text.

pub mod article;
pub mod course;

use sqlx::{Postgres, QueryBuilder};

use crate::domain::params::Page;

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i32),
    TextArray(Vec<String>),
}

/// One filter condition contributed by one filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive literal substring match against any of `columns`.
    Search {
        columns: &'static [&'static str],
        pattern: String,
    },
    /// `lower(column)` is one of `values`. Values are already lower-cased.
    TextIn {
        column: &'static str,
        values: Vec<String>,
    },
    /// Integer `column` is one of `values`.
    CodeIn {
        column: &'static str,
        values: Vec<i32>,
    },
    CodeEq {
        column: &'static str,
        value: i32,
    },
    IsTrue {
        column: &'static str,
    },
    /// The text array produced by `set_expr` shares at least one element with `values`.
    AnyOverlap {
        set_expr: &'static str,
        values: Vec<String>,
    },
    /// The numeric expression `expr` is greater than zero.
    Positive {
        expr: &'static str,
    },
}

impl Predicate {
    /// Substring search over `columns`. `None` when there is no term.
    pub fn search(columns: &'static [&'static str], term: Option<&str>) -> Option<Self> {
        let term = term?;
        if term.is_empty() {
            return None;
        }

        Some(Self::Search {
            columns,
            pattern: format!("%{}%", escape_like(&term.to_lowercase())),
        })
    }

    /// Set membership. `None` when `values` is empty.
    pub fn text_in(column: &'static str, values: &[String]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        Some(Self::TextIn {
            column,
            values: values.iter().map(|value| value.to_lowercase()).collect(),
        })
    }

    pub fn code_in(column: &'static str, values: &[i32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        Some(Self::CodeIn {
            column,
            values: values.to_vec(),
        })
    }

    pub fn code_eq(column: &'static str, value: Option<i32>) -> Option<Self> {
        value.map(|value| Self::CodeEq { column, value })
    }

    /// A `false` flag never restricts the result.
    pub fn is_true(column: &'static str, flag: bool) -> Option<Self> {
        flag.then_some(Self::IsTrue { column })
    }

    pub fn any_overlap(set_expr: &'static str, values: &[String]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        Some(Self::AnyOverlap {
            set_expr,
            values: values.iter().map(|value| value.to_lowercase()).collect(),
        })
    }

    pub fn positive(expr: &'static str, flag: bool) -> Option<Self> {
        flag.then_some(Self::Positive { expr })
    }

    /// Values this predicate binds, in placeholder order.
    pub fn binds(&self) -> Vec<BindValue> {
        match self {
            Self::Search { columns, pattern } => columns
                .iter()
                .map(|_| BindValue::Text(pattern.clone()))
                .collect(),
            Self::TextIn { values, .. } => values.iter().cloned().map(BindValue::Text).collect(),
            Self::CodeIn { values, .. } => values.iter().copied().map(BindValue::Int).collect(),
            Self::CodeEq { value, .. } => vec![BindValue::Int(*value)],
            Self::IsTrue { .. } | Self::Positive { .. } => Vec::new(),
            Self::AnyOverlap { values, .. } => vec![BindValue::TextArray(values.clone())],
        }
    }

    fn push_sql(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::Search { columns, pattern } => {
                builder.push("(");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        builder.push(" OR ");
                    }
                    builder.push("LOWER(");
                    builder.push(*column);
                    builder.push(") LIKE ");
                    builder.push_bind(pattern.clone());
                }
                builder.push(")");
            }
            Self::TextIn { column, values } => {
                builder.push("LOWER(");
                builder.push(*column);
                builder.push(") IN (");
                let mut separated = builder.separated(", ");
                for value in values {
                    separated.push_bind(value.clone());
                }
                builder.push(")");
            }
            Self::CodeIn { column, values } => {
                builder.push(*column);
                builder.push(" IN (");
                let mut separated = builder.separated(", ");
                for value in values {
                    separated.push_bind(*value);
                }
                builder.push(")");
            }
            Self::CodeEq { column, value } => {
                builder.push(*column);
                builder.push(" = ");
                builder.push_bind(*value);
            }
            Self::IsTrue { column } => {
                builder.push(*column);
                builder.push(" IS TRUE");
            }
            Self::AnyOverlap { set_expr, values } => {
                builder.push(*set_expr);
                builder.push(" && ");
                builder.push_bind(values.clone());
            }
            Self::Positive { expr } => {
                builder.push(*expr);
                builder.push(" > 0");
            }
        }
    }
}

/// Escapes `LIKE` wildcards so the term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A base query plus the predicates of one request.
#[derive(Debug, Clone)]
pub struct FilteredQuery {
    select: &'static str,
    group_by: Option<&'static str>,
    order_by: &'static str,
    filters: Vec<Predicate>,
    having: Vec<Predicate>,
}

impl FilteredQuery {
    /// `select` is the full `select ... from ... join ...` text; `order_by`
    /// is the column list used by the page statement.
    pub fn new(select: &'static str, order_by: &'static str) -> Self {
        Self {
            select,
            group_by: None,
            order_by,
            filters: Vec::new(),
            having: Vec::new(),
        }
    }

    pub fn group_by(mut self, columns: &'static str) -> Self {
        self.group_by = Some(columns);
        self
    }

    /// Adds a pre-aggregation predicate, if any.
    pub fn filter(mut self, predicate: Option<Predicate>) -> Self {
        self.filters.extend(predicate);
        self
    }

    /// Adds a post-aggregation predicate, if any.
    pub fn having(mut self, predicate: Option<Predicate>) -> Self {
        self.having.extend(predicate);
        self
    }

    pub fn filters(&self) -> &[Predicate] {
        &self.filters
    }

    pub fn having_predicates(&self) -> &[Predicate] {
        &self.having
    }

    /// Every bound value of the filtered query, in placeholder order.
    pub fn binds(&self) -> Vec<BindValue> {
        self.filters
            .iter()
            .chain(self.having.iter())
            .flat_map(Predicate::binds)
            .collect()
    }

    /// `select count(*)` over the filtered query.
    pub fn count_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM (");
        self.push_filtered(&mut builder);
        builder.push(") AS filtered");
        builder
    }

    /// The filtered query in its fixed order, limited to one page.
    pub fn page_query(&self, page: &Page) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("");
        self.push_filtered(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(self.order_by);
        builder.push(" LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());
        builder
    }

    /// The filtered query without ordering or limits.
    pub fn statement(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("");
        self.push_filtered(&mut builder);
        builder
    }

    fn push_filtered(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        builder.push(self.select);

        push_conjunction(builder, " WHERE ", &self.filters);

        if let Some(group_by) = self.group_by {
            builder.push(" GROUP BY ");
            builder.push(group_by);
        }

        push_conjunction(builder, " HAVING ", &self.having);
    }
}

fn push_conjunction(
    builder: &mut QueryBuilder<'static, Postgres>,
    keyword: &str,
    predicates: &[Predicate],
) {
    for (i, predicate) in predicates.iter().enumerate() {
        builder.push(if i == 0 { keyword } else { " AND " });
        predicate.push_sql(builder);
    }
}
