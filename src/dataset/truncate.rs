use std::sync::Arc;

use crate::clauses::{TruncateClauses, TruncateOptions};
use crate::dialect::{get_dialect, SqlDialect, DEFAULT_DIALECT};
use crate::error::{Error, Result};
use crate::executor::{DbPool, QueryExecutor};
use crate::expression::{Appendable, ColumnList, Expression};
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

use super::{table_expression, PreparedMode};

/// Immutable TRUNCATE builder.
#[derive(Debug, Clone)]
pub struct TruncateDataset {
    dialect: Arc<dyn SqlDialect>,
    clauses: TruncateClauses,
    prepared: PreparedMode,
    pool: Option<DbPool>,
    err: Option<Error>,
}

impl TruncateDataset {
    pub fn new<I, E>(tables: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let tables = ColumnList::new(
            tables
                .into_iter()
                .map(|t| table_expression("TRUNCATE", t.into())),
        );
        Self {
            dialect: get_dialect(DEFAULT_DIALECT),
            clauses: TruncateClauses::new().set_table(tables),
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

    /// Replaces all options at once.
    pub fn with_options(&self, options: TruncateOptions) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_options(options);
        d
    }

    pub fn cascade(&self) -> Self {
        let mut options = self.clauses.options().clone();
        options.cascade = true;
        self.with_options(options)
    }

    pub fn no_cascade(&self) -> Self {
        let mut options = self.clauses.options().clone();
        options.cascade = false;
        self.with_options(options)
    }

    pub fn restrict(&self) -> Self {
        let mut options = self.clauses.options().clone();
        options.restrict = true;
        self.with_options(options)
    }

    pub fn no_restrict(&self) -> Self {
        let mut options = self.clauses.options().clone();
        options.restrict = false;
        self.with_options(options)
    }

    /// Identity keyword rendered before `IDENTITY`, e.g. `"restart"` or
    /// `"continue"`.
    pub fn identity<S: Into<String>>(&self, identity: S) -> Self {
        let mut options = self.clauses.options().clone();
        options.identity = Some(identity.into());
        self.with_options(options)
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

    pub fn clauses(&self) -> &TruncateClauses {
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
            None => self.dialect.to_truncate_sql(&mut b, &self.clauses),
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

impl Appendable for TruncateDataset {
    fn append_sql(&self, b: &mut SqlBuilder) {
        match &self.err {
            Some(err) => b.set_error(err.clone()),
            None => self.dialect.to_truncate_sql(b, &self.clauses),
        }
    }

    fn dialect_name(&self) -> &str {
        self.dialect.name()
    }
}

impl From<TruncateDataset> for Expression {
    fn from(d: TruncateDataset) -> Self {
        Expression::Subquery(crate::expression::Subquery::new(d))
    }
}
