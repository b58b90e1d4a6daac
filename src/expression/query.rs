use std::borrow::Cow;
use std::fmt;

use crate::dialect::DEFAULT_DIALECT;
use crate::error::Error;
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

/// A nested statement that can write itself into a caller-supplied
/// [`SqlBuilder`]: the seam through which statements embed inside one another
/// (CTE bodies, INSERT row sources). Implemented by the four dataset types and
/// by [`SqlQuery`].
pub trait Appendable: fmt::Debug + Send + Sync {
    fn append_sql(&self, b: &mut SqlBuilder);

    /// Registry name of the dialect this statement was built against; used by
    /// the nested-statement consistency check.
    fn dialect_name(&self) -> &str;

    /// Whether the statement produces a RETURNING column set.
    fn returns_columns(&self) -> bool {
        false
    }
}

/// A SELECT-shaped sub-statement: raw SQL text with `?` slots and bound
/// values, carrying its own dialect name (`"default"` until overridden).
///
/// Stands in for a full query builder as the row source of an INSERT or the
/// body of a common table expression.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    sql: Cow<'static, str>,
    args: Vec<Param>,
    dialect: Cow<'static, str>,
}

impl SqlQuery {
    pub fn new<S: Into<Cow<'static, str>>>(sql: S) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
            dialect: Cow::Borrowed(DEFAULT_DIALECT),
        }
    }

    /// Binds the next `?` slot.
    pub fn bind<P: Into<Param>>(mut self, value: P) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn with_dialect<S: Into<Cow<'static, str>>>(mut self, name: S) -> Self {
        self.dialect = name.into();
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub(crate) fn adopt_dialect(&mut self, name: &str) {
        self.dialect = Cow::Owned(name.to_string());
    }
}

impl Appendable for SqlQuery {
    fn append_sql(&self, b: &mut SqlBuilder) {
        let slots = self.sql.matches('?').count();
        if slots != self.args.len() {
            b.set_error(Error::invalid(format!(
                "query has {} placeholder slots but {} bound values",
                slots,
                self.args.len()
            )));
            return;
        }
        let mut pieces = self.sql.split('?');
        if let Some(first) = pieces.next() {
            b.push(first);
        }
        for (piece, arg) in pieces.zip(self.args.iter()) {
            b.push_value(arg);
            b.push(piece);
        }
    }

    fn dialect_name(&self) -> &str {
        &self.dialect
    }
}
