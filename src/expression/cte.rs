use crate::dialect::DialectOptions;
use crate::expression::Expression;
use crate::sql_builder::SqlBuilder;

/// A common-table-expression descriptor: `name [(col, ...)] AS (subquery)`.
///
/// The name is written verbatim and may carry its column list in the text,
/// e.g. `"paths(id, parent)"` for a recursive CTE.
#[derive(Debug, Clone)]
pub struct CommonTableExpression {
    recursive: bool,
    name: String,
    subquery: Box<Expression>,
}

impl CommonTableExpression {
    pub fn new<S: Into<String>>(recursive: bool, name: S, subquery: Expression) -> Self {
        Self {
            recursive,
            name: name.into(),
            subquery: Box::new(subquery),
        }
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, opts: &DialectOptions) {
        b.push(&self.name);
        b.push(" AS (");
        self.subquery.append_sql(b, opts);
        b.push_char(')');
    }
}
