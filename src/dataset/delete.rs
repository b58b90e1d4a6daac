use std::sync::Arc;

use crate::clauses::{DeleteClauses, Limit};
use crate::dialect::{get_dialect, SqlDialect, DEFAULT_DIALECT};
use crate::error::{Error, Result};
use crate::executor::{DbPool, QueryExecutor};
use crate::expression::{
    Appendable, ColumnList, CommonTableExpression, Expression, OrderedExpression,
};
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

use super::{table_identifier, PreparedMode};

/// Immutable DELETE builder. The target must be a plain identifier.
#[derive(Debug, Clone)]
pub struct DeleteDataset {
    dialect: Arc<dyn SqlDialect>,
    clauses: DeleteClauses,
    prepared: PreparedMode,
    pool: Option<DbPool>,
    err: Option<Error>,
}

impl DeleteDataset {
    pub fn new<E: Into<Expression>>(table: E) -> Self {
        let from = table_identifier("DELETE", table.into());
        Self {
            dialect: get_dialect(DEFAULT_DIALECT),
            clauses: DeleteClauses::new().set_from(from),
            prepared: PreparedMode::default(),
            pool: None,
            err: None,
        }
    }

    pub fn with_dialect(&self, name: &str) -> Self {
        let mut d = self.clone();
        d.dialect = get_dialect(name);
        d
    }

    /// Rebinds the dataset to an already-resolved dialect.
    pub fn set_dialect(&self, dialect: Arc<dyn SqlDialect>) -> Self {
        let mut d = self.clone();
        d.dialect = dialect;
        d
    }

    pub fn dialect(&self) -> &Arc<dyn SqlDialect> {
        &self.dialect
    }

    pub fn dialect_name(&self) -> &str {
        self.dialect.name()
    }

    pub fn prepared(&self, prepared: bool) -> Self {
        let mut d = self.clone();
        d.prepared = PreparedMode::from_bool(prepared);
        d
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared.resolve(self.dialect.options().default_prepared)
    }

    /// Appends a predicate; multiple calls are joined with AND.
    pub fn where_<E: Into<Expression>>(&self, predicate: E) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.where_append(predicate.into());
        d
    }

    pub fn clear_where(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.clear_where();
        d
    }

    pub fn order<I>(&self, terms: I) -> Self
    where
        I: IntoIterator<Item = OrderedExpression>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.set_order(terms.into_iter().collect());
        d
    }

    pub fn order_append<I>(&self, terms: I) -> Self
    where
        I: IntoIterator<Item = OrderedExpression>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.order_append(terms.into_iter().collect());
        d
    }

    pub fn order_prepend<I>(&self, terms: I) -> Self
    where
        I: IntoIterator<Item = OrderedExpression>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.order_prepend(terms.into_iter().collect());
        d
    }

    pub fn clear_order(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.clear_order();
        d
    }

    /// Limits the number of affected rows; zero removes any current limit.
    pub fn limit(&self, limit: u64) -> Self {
        let mut d = self.clone();
        d.clauses = if limit > 0 {
            d.clauses.set_limit(Limit::Count(limit))
        } else {
            d.clauses.clear_limit()
        };
        d
    }

    pub fn limit_all(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_limit(Limit::All);
        d
    }

    pub fn clear_limit(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.clear_limit();
        d
    }

    pub fn returning<I, E>(&self, cols: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.set_returning(Some(ColumnList::new(cols)));
        d
    }

    pub fn with<E: Into<Expression>>(&self, name: &str, subquery: E) -> Self {
        let mut d = self.clone();
        d.clauses = d
            .clauses
            .common_tables_append(CommonTableExpression::new(false, name, subquery.into()));
        d
    }

    pub fn with_recursive<E: Into<Expression>>(&self, name: &str, subquery: E) -> Self {
        let mut d = self.clone();
        d.clauses = d
            .clauses
            .common_tables_append(CommonTableExpression::new(true, name, subquery.into()));
        d
    }

    pub fn set_error(&self, err: Error) -> Self {
        let mut d = self.clone();
        if d.err.is_none() {
            d.err = Some(err);
        }
        d
    }

    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    pub fn clauses(&self) -> &DeleteClauses {
        &self.clauses
    }

    pub(crate) fn with_pool(mut self, pool: DbPool) -> Self {
        self.pool = Some(pool);
        self
    }

    fn sql_builder(&self) -> SqlBuilder {
        let mut b = SqlBuilder::new(self.is_prepared(), self.dialect.options().placeholder);
        match &self.err {
            Some(err) => b.set_error(err.clone()),
            None => self.dialect.to_delete_sql(&mut b, &self.clauses),
        }
        b
    }

    pub fn to_sql(&self) -> Result<(String, Vec<Param>)> {
        self.sql_builder().finish()
    }

    pub fn must_to_sql(&self) -> (String, Vec<Param>) {
        match self.to_sql() {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::from_sql_builder(self.sql_builder(), self.pool.clone())
    }
}

impl Appendable for DeleteDataset {
    fn append_sql(&self, b: &mut SqlBuilder) {
        match &self.err {
            Some(err) => b.set_error(err.clone()),
            None => self.dialect.to_delete_sql(b, &self.clauses),
        }
    }

    fn dialect_name(&self) -> &str {
        self.dialect.name()
    }

    fn returns_columns(&self) -> bool {
        self.clauses.has_returning()
    }
}

impl From<DeleteDataset> for Expression {
    fn from(d: DeleteDataset) -> Self {
        Expression::Subquery(crate::expression::Subquery::new(d))
    }
}
