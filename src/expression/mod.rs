//! Immutable expression nodes embedded in clause records.
//!
//! The hierarchy is a closed, tagged set of variants with one capability:
//! rendering into a [`SqlBuilder`]. Nodes never change after construction;
//! clause records own them by value, which is what makes branching reuse of
//! datasets safe.

mod __tests__;
mod cmp;
mod conflict;
mod cte;
pub mod helpers;
pub(crate) mod ident;
mod literal;
mod ordered;
mod query;
mod record;

use std::sync::Arc;

pub use cmp::{BinaryExpression, BinaryOp, Operand};
pub use conflict::ConflictExpression;
pub use cte::CommonTableExpression;
pub use ident::Identifier;
pub use literal::Literal;
pub use ordered::{NullOrdering, OrderedExpression, SortDirection};
pub use query::{Appendable, SqlQuery};
pub use record::Record;

use crate::dialect::DialectOptions;
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Value(Param),
    Binary(Box<BinaryExpression>),
    ColumnList(ColumnList),
    Ordered(Box<OrderedExpression>),
    CommonTable(Box<CommonTableExpression>),
    Conflict(ConflictExpression),
    Subquery(Subquery),
}

impl Expression {
    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, opts: &DialectOptions) {
        match self {
            Expression::Identifier(ident) => ident.append_sql(b, opts),
            Expression::Literal(lit) => lit.append_sql(b, opts),
            Expression::Value(v) => b.push_value(v),
            Expression::Binary(bin) => bin.append_sql(b, opts),
            Expression::ColumnList(cols) => cols.append_sql(b, opts),
            Expression::Ordered(ord) => ord.append_sql(b, opts),
            Expression::CommonTable(cte) => cte.append_sql(b, opts),
            // Conflict descriptors are rendered by the INSERT renderer, which
            // knows the dialect's conflict syntax; standalone they are inert.
            Expression::Conflict(_) => {}
            Expression::Subquery(sub) => sub.0.append_sql(b),
        }
    }
}

/// A shareable handle to a nested renderable statement.
#[derive(Debug, Clone)]
pub struct Subquery(pub(crate) Arc<dyn Appendable>);

impl Subquery {
    pub fn new<A: Appendable + 'static>(inner: A) -> Self {
        Self(Arc::new(inner))
    }

    pub fn dialect_name(&self) -> &str {
        self.0.dialect_name()
    }
}

/// Ordered sequence of expressions: column lists, RETURNING lists, UPDATE FROM
/// tables, TRUNCATE targets.
#[derive(Debug, Clone, Default)]
pub struct ColumnList {
    columns: Vec<Expression>,
}

impl ColumnList {
    pub fn new<I, E>(columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// New list with `other`'s entries appended after the existing ones.
    pub fn append(&self, other: ColumnList) -> Self {
        let mut columns = self.columns.clone();
        columns.extend(other.columns);
        Self { columns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, opts: &DialectOptions) {
        for (i, col) in self.columns.iter().enumerate() {
            b.push_sep(i, ", ");
            col.append_sql(b, opts);
        }
    }
}

// ---- conversions into Expression ----
//
// A bare string is an identifier; bound values go through `Param` (or the
// `val` helper) explicitly.

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::Identifier(Identifier::parse(s))
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Expression::Identifier(Identifier::parse(&s))
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Self {
        Expression::Identifier(ident)
    }
}

impl From<Literal> for Expression {
    fn from(lit: Literal) -> Self {
        Expression::Literal(lit)
    }
}

impl From<Param> for Expression {
    fn from(v: Param) -> Self {
        Expression::Value(v)
    }
}

impl From<BinaryExpression> for Expression {
    fn from(bin: BinaryExpression) -> Self {
        Expression::Binary(Box::new(bin))
    }
}

impl From<ColumnList> for Expression {
    fn from(cols: ColumnList) -> Self {
        Expression::ColumnList(cols)
    }
}

impl From<OrderedExpression> for Expression {
    fn from(ord: OrderedExpression) -> Self {
        Expression::Ordered(Box::new(ord))
    }
}

impl From<CommonTableExpression> for Expression {
    fn from(cte: CommonTableExpression) -> Self {
        Expression::CommonTable(Box::new(cte))
    }
}

impl From<ConflictExpression> for Expression {
    fn from(c: ConflictExpression) -> Self {
        Expression::Conflict(c)
    }
}

impl From<Subquery> for Expression {
    fn from(sub: Subquery) -> Self {
        Expression::Subquery(sub)
    }
}

impl From<SqlQuery> for Expression {
    fn from(q: SqlQuery) -> Self {
        Expression::Subquery(Subquery::new(q))
    }
}
