use crate::expression::{
    ColumnList, CommonTableExpression, ConflictExpression, Expression, Identifier, Record, SqlQuery,
};
use crate::param::Param;

/// Which row source was set most recently; rendering consults this so that
/// the last call wins when both literal rows and a query source are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowSource {
    #[default]
    None,
    Vals,
    Rows,
    Query,
}

/// Structured clause data for an INSERT statement.
#[derive(Debug, Clone, Default)]
pub struct InsertClauses {
    common_tables: Vec<CommonTableExpression>,
    into: Option<Expression>,
    alias: Option<Identifier>,
    cols: Option<ColumnList>,
    vals: Option<Vec<Vec<Param>>>,
    rows: Option<Vec<Record>>,
    from: Option<SqlQuery>,
    returning: Option<ColumnList>,
    on_conflict: Option<ConflictExpression>,
    source: RowSource,
}

impl InsertClauses {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- accessors ----

    pub fn common_tables(&self) -> &[CommonTableExpression] {
        &self.common_tables
    }

    pub fn into_target(&self) -> Option<&Expression> {
        self.into.as_ref()
    }

    pub fn alias(&self) -> Option<&Identifier> {
        self.alias.as_ref()
    }

    pub fn cols(&self) -> Option<&ColumnList> {
        self.cols.as_ref()
    }

    pub fn vals(&self) -> Option<&Vec<Vec<Param>>> {
        self.vals.as_ref()
    }

    pub fn rows(&self) -> Option<&Vec<Record>> {
        self.rows.as_ref()
    }

    pub fn from(&self) -> Option<&SqlQuery> {
        self.from.as_ref()
    }

    pub fn returning(&self) -> Option<&ColumnList> {
        self.returning.as_ref()
    }

    pub fn on_conflict(&self) -> Option<&ConflictExpression> {
        self.on_conflict.as_ref()
    }

    pub fn row_source(&self) -> RowSource {
        self.source
    }

    pub fn has_returning(&self) -> bool {
        self.returning.as_ref().is_some_and(|r| !r.is_empty())
    }

    // ---- copy-on-write setters ----

    pub fn common_tables_append(&self, cte: CommonTableExpression) -> Self {
        let mut c = self.clone();
        c.common_tables.push(cte);
        c
    }

    pub fn set_into(&self, into: Expression) -> Self {
        let mut c = self.clone();
        c.into = Some(into);
        c
    }

    pub fn set_alias(&self, alias: Option<Identifier>) -> Self {
        let mut c = self.clone();
        c.alias = alias;
        c
    }

    pub fn set_cols(&self, cols: Option<ColumnList>) -> Self {
        let mut c = self.clone();
        c.cols = cols;
        c
    }

    pub fn cols_append(&self, cols: ColumnList) -> Self {
        let mut c = self.clone();
        c.cols = Some(match &self.cols {
            Some(existing) => existing.append(cols),
            None => cols,
        });
        c
    }

    pub fn set_vals(&self, vals: Option<Vec<Vec<Param>>>) -> Self {
        let mut c = self.clone();
        c.vals = vals;
        c.source = if c.vals.is_some() {
            RowSource::Vals
        } else {
            c.recompute_source(RowSource::Vals)
        };
        c
    }

    pub fn vals_append(&self, rows: Vec<Vec<Param>>) -> Self {
        let mut c = self.clone();
        c.vals.get_or_insert_with(Vec::new).extend(rows);
        c.source = RowSource::Vals;
        c
    }

    pub fn set_rows(&self, rows: Option<Vec<Record>>) -> Self {
        let mut c = self.clone();
        c.rows = rows;
        c.source = if c.rows.is_some() {
            RowSource::Rows
        } else {
            c.recompute_source(RowSource::Rows)
        };
        c
    }

    pub fn set_from(&self, from: SqlQuery) -> Self {
        let mut c = self.clone();
        c.from = Some(from);
        c.source = RowSource::Query;
        c
    }

    pub fn set_returning(&self, returning: Option<ColumnList>) -> Self {
        let mut c = self.clone();
        c.returning = returning;
        c
    }

    pub fn set_on_conflict(&self, conflict: Option<ConflictExpression>) -> Self {
        let mut c = self.clone();
        c.on_conflict = conflict;
        c
    }

    /// New marker after `cleared` was emptied: fall back to whichever other
    /// source still holds data.
    fn recompute_source(&self, cleared: RowSource) -> RowSource {
        if self.source != cleared {
            return self.source;
        }
        if self.from.is_some() {
            RowSource::Query
        } else if !matches!(cleared, RowSource::Rows) && self.rows.is_some() {
            RowSource::Rows
        } else if !matches!(cleared, RowSource::Vals) && self.vals.is_some() {
            RowSource::Vals
        } else {
            RowSource::None
        }
    }
}
