use crate::expression::{Expression, Record};

/// Conflict behavior for an INSERT (`ON CONFLICT ...`).
///
/// The target is written verbatim inside the parentheses, so it can name a
/// column list or an `ON CONSTRAINT` expression.
#[derive(Debug, Clone)]
pub enum ConflictExpression {
    DoNothing {
        target: Option<String>,
    },
    DoUpdate {
        target: String,
        set: Record,
        where_clause: Option<Box<Expression>>,
    },
}

impl ConflictExpression {
    pub fn do_nothing() -> Self {
        ConflictExpression::DoNothing { target: None }
    }

    pub fn do_nothing_on<S: Into<String>>(target: S) -> Self {
        ConflictExpression::DoNothing {
            target: Some(target.into()),
        }
    }

    pub fn do_update<S: Into<String>>(target: S, set: Record) -> Self {
        ConflictExpression::DoUpdate {
            target: target.into(),
            set,
            where_clause: None,
        }
    }

    /// Restricts a DO UPDATE action with a WHERE predicate. No effect on DO NOTHING.
    pub fn where_update<E: Into<Expression>>(self, predicate: E) -> Self {
        match self {
            ConflictExpression::DoUpdate { target, set, .. } => ConflictExpression::DoUpdate {
                target,
                set,
                where_clause: Some(Box::new(predicate.into())),
            },
            other => other,
        }
    }
}
