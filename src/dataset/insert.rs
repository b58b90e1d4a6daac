use std::sync::Arc;

use crate::clauses::InsertClauses;
use crate::dialect::{get_dialect, SqlDialect, DEFAULT_DIALECT};
use crate::error::{Error, Result};
use crate::executor::{DbPool, QueryExecutor};
use crate::expression::{
    Appendable, ColumnList, CommonTableExpression, ConflictExpression, Expression, Identifier,
    Record, SqlQuery,
};
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

use super::{table_expression, PreparedMode};

/// Immutable INSERT builder.
///
/// Row sources are exclusive: literal value rows ([`vals`](Self::vals)),
/// record rows ([`rows`](Self::rows)) and a query source
/// ([`from_query`](Self::from_query)) each displace the others, with the most
/// recent call winning. With no source at all the statement renders `DEFAULT
/// VALUES`.
#[derive(Debug, Clone)]
pub struct InsertDataset {
    dialect: Arc<dyn SqlDialect>,
    clauses: InsertClauses,
    prepared: PreparedMode,
    pool: Option<DbPool>,
    err: Option<Error>,
}

impl InsertDataset {
    pub fn new<E: Into<Expression>>(table: E) -> Self {
        let into = table_expression("INSERT", table.into());
        Self {
            dialect: get_dialect(DEFAULT_DIALECT),
            clauses: InsertClauses::new().set_into(into),
            prepared: PreparedMode::default(),
            pool: None,
            err: None,
        }
    }

    /// Rebinds the dataset to a registered dialect; unknown names resolve to
    /// the default dialect.
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

    /// Forces prepared (`true`) or literal (`false`) rendering, overriding the
    /// dialect's default.
    pub fn prepared(&self, prepared: bool) -> Self {
        let mut d = self.clone();
        d.prepared = PreparedMode::from_bool(prepared);
        d
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared.resolve(self.dialect.options().default_prepared)
    }

    /// Replaces the explicit column list used with [`vals`](Self::vals) and
    /// [`from_query`](Self::from_query) sources.
    pub fn cols<I, E>(&self, cols: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.set_cols(Some(ColumnList::new(cols)));
        d
    }

    pub fn cols_append<I, E>(&self, cols: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.cols_append(ColumnList::new(cols));
        d
    }

    pub fn clear_cols(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_cols(None);
        d
    }

    /// Appends literal value rows and makes them the active row source.
    pub fn vals<I>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Param>>,
    {
        let mut d = self.clone();
        d.clauses = d.clauses.vals_append(rows.into_iter().collect());
        d
    }

    pub fn clear_vals(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_vals(None);
        d
    }

    /// Appends record rows and makes them the active row source. The column
    /// list comes from the first record; every record must cover the same
    /// columns.
    pub fn rows<I>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut d = self.clone();
        let mut all: Vec<Record> = d.clauses.rows().cloned().unwrap_or_default();
        all.extend(rows);
        d.clauses = d.clauses.set_rows(Some(all));
        d
    }

    pub fn clear_rows(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_rows(None);
        d
    }

    /// Uses `query` as the row source (`INSERT INTO ... SELECT ...`).
    ///
    /// The query must agree with this dataset's dialect: a query still on the
    /// default dialect adopts this dataset's, while a query built against a
    /// different explicit dialect is a programming error and panics.
    pub fn from_query(&self, query: SqlQuery) -> Self {
        let mut query = query;
        let outer = self.dialect.name();
        let inner = query.dialect_name();
        if inner == DEFAULT_DIALECT {
            query.adopt_dialect(outer);
        } else if inner != outer {
            panic!(
                "{}",
                Error::IncompatibleDialects {
                    outer: outer.to_string(),
                    inner: inner.to_string(),
                }
            );
        }
        let mut d = self.clone();
        d.clauses = d.clauses.set_from(query);
        d
    }

    /// Aliases the target table (`INSERT INTO t AS alias`).
    pub fn as_<I: Into<Identifier>>(&self, alias: I) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_alias(Some(alias.into()));
        d
    }

    pub fn get_as(&self) -> Option<&Identifier> {
        self.clauses.alias()
    }

    pub fn on_conflict(&self, conflict: ConflictExpression) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_on_conflict(Some(conflict));
        d
    }

    pub fn clear_on_conflict(&self) -> Self {
        let mut d = self.clone();
        d.clauses = d.clauses.set_on_conflict(None);
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

    /// Records an error on the dataset; the first recorded error wins and is
    /// reported by the next terminal operation.
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

    pub fn clauses(&self) -> &InsertClauses {
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
            None => self.dialect.to_insert_sql(&mut b, &self.clauses),
        }
        b
    }

    /// Renders the statement, returning SQL text and bound parameters (empty
    /// in literal mode).
    pub fn to_sql(&self) -> Result<(String, Vec<Param>)> {
        self.sql_builder().finish()
    }

    /// Like [`to_sql`](Self::to_sql) but panics on error.
    pub fn must_to_sql(&self) -> (String, Vec<Param>) {
        match self.to_sql() {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }

    /// A one-shot executor over the rendered statement and this dataset's
    /// connection pool.
    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::from_sql_builder(self.sql_builder(), self.pool.clone())
    }
}

impl Appendable for InsertDataset {
    fn append_sql(&self, b: &mut SqlBuilder) {
        match &self.err {
            Some(err) => b.set_error(err.clone()),
            None => self.dialect.to_insert_sql(b, &self.clauses),
        }
    }

    fn dialect_name(&self) -> &str {
        self.dialect.name()
    }

    fn returns_columns(&self) -> bool {
        self.clauses.has_returning()
    }
}

impl From<InsertDataset> for Expression {
    fn from(d: InsertDataset) -> Self {
        Expression::Subquery(crate::expression::Subquery::new(d))
    }
}
