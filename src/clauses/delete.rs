use super::Limit;
use crate::expression::{
    ColumnList, CommonTableExpression, Expression, Identifier, OrderedExpression,
};

/// Structured clause data for a DELETE statement. The FROM target is always a
/// plain identifier; the dataset rejects anything else at the call site.
#[derive(Debug, Clone, Default)]
pub struct DeleteClauses {
    common_tables: Vec<CommonTableExpression>,
    from: Option<Identifier>,
    where_clause: Vec<Expression>,
    order: Vec<OrderedExpression>,
    limit: Option<Limit>,
    returning: Option<ColumnList>,
}

impl DeleteClauses {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- accessors ----

    pub fn common_tables(&self) -> &[CommonTableExpression] {
        &self.common_tables
    }

    pub fn from(&self) -> Option<&Identifier> {
        self.from.as_ref()
    }

    pub fn where_clause(&self) -> &[Expression] {
        &self.where_clause
    }

    pub fn order(&self) -> &[OrderedExpression] {
        &self.order
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn returning(&self) -> Option<&ColumnList> {
        self.returning.as_ref()
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

    pub fn set_from(&self, from: Identifier) -> Self {
        let mut c = self.clone();
        c.from = Some(from);
        c
    }

    pub fn where_append(&self, expression: Expression) -> Self {
        let mut c = self.clone();
        c.where_clause.push(expression);
        c
    }

    pub fn clear_where(&self) -> Self {
        let mut c = self.clone();
        c.where_clause.clear();
        c
    }

    pub fn set_order(&self, order: Vec<OrderedExpression>) -> Self {
        let mut c = self.clone();
        c.order = order;
        c
    }

    pub fn order_append(&self, order: Vec<OrderedExpression>) -> Self {
        let mut c = self.clone();
        c.order.extend(order);
        c
    }

    pub fn order_prepend(&self, order: Vec<OrderedExpression>) -> Self {
        let mut c = self.clone();
        let mut merged = order;
        merged.extend(c.order.drain(..));
        c.order = merged;
        c
    }

    pub fn clear_order(&self) -> Self {
        let mut c = self.clone();
        c.order.clear();
        c
    }

    pub fn set_limit(&self, limit: Limit) -> Self {
        let mut c = self.clone();
        c.limit = Some(limit);
        c
    }

    pub fn clear_limit(&self) -> Self {
        let mut c = self.clone();
        c.limit = None;
        c
    }

    pub fn set_returning(&self, returning: Option<ColumnList>) -> Self {
        let mut c = self.clone();
        c.returning = returning;
        c
    }
}
