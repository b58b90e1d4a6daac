use crate::dialect::DialectOptions;
use crate::expression::Identifier;
use crate::sql_builder::SqlBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    First,
    Last,
}

/// One ORDER BY term: column, direction and optional null placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedExpression {
    target: Identifier,
    direction: SortDirection,
    nulls: Option<NullOrdering>,
}

impl OrderedExpression {
    pub fn new<I: Into<Identifier>>(target: I, direction: SortDirection) -> Self {
        Self {
            target: target.into(),
            direction,
            nulls: None,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrdering::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrdering::Last);
        self
    }

    pub fn target(&self) -> &Identifier {
        &self.target
    }

    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, opts: &DialectOptions) {
        self.target.append_sql(b, opts);
        b.push(match self.direction {
            SortDirection::Asc => " ASC",
            SortDirection::Desc => " DESC",
        });
        match self.nulls {
            Some(NullOrdering::First) => b.push(" NULLS FIRST"),
            Some(NullOrdering::Last) => b.push(" NULLS LAST"),
            None => {}
        }
    }
}
