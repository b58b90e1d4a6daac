use crate::expression::Expression;
use crate::param::Param;

/// Ordered (column, value) pairs.
///
/// Used as the SET source of an UPDATE, as conflict-update assignments and as
/// explicit INSERT rows. Iteration order is insertion order, which makes
/// rendering deterministic without sorting.
#[derive(Debug, Clone, Default)]
pub struct Record {
    entries: Vec<(String, Expression)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bound-value assignment. A column set twice keeps both entries;
    /// the later one wins in SQL semantics, so callers are expected not to.
    pub fn set<C, V>(mut self, column: C, value: V) -> Self
    where
        C: Into<String>,
        V: Into<Param>,
    {
        self.entries
            .push((column.into(), Expression::Value(value.into())));
        self
    }

    /// Adds an expression assignment, e.g. `set_expr("count", lit("count + 1"))`
    /// or `set_expr("name", excluded("name"))`.
    pub fn set_expr<C, E>(mut self, column: C, value: E) -> Self
    where
        C: Into<String>,
        E: Into<Expression>,
    {
        self.entries.push((column.into(), value.into()));
        self
    }

    pub fn get(&self, column: &str) -> Option<&Expression> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, e)| e)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expression)> {
        self.entries.iter().map(|(c, e)| (c.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, V: Into<Param>> FromIterator<(C, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(c, v)| (c.into(), Expression::Value(v.into())))
                .collect(),
        }
    }
}
