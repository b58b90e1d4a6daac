//! Immutable statement builders.
//!
//! Every mutator takes `&self` and returns a new dataset with the change
//! applied, so datasets branch freely: a shared base can be specialized per
//! call site without the bases observing each other. Rendering state is a
//! sticky first-error channel; terminal operations ([`to_sql`], [`executor`])
//! surface whichever error was recorded first.
//!
//! [`to_sql`]: InsertDataset::to_sql
//! [`executor`]: InsertDataset::executor

mod __tests__;
mod delete;
mod insert;
mod truncate;
mod update;

pub use delete::DeleteDataset;
pub use insert::InsertDataset;
pub use truncate::TruncateDataset;
pub use update::UpdateDataset;

use crate::error::Error;
use crate::expression::{Expression, Identifier};

/// Per-dataset prepared-statement preference, resolved against the dialect's
/// default when the caller never expressed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreparedMode {
    #[default]
    DialectDefault,
    Prepared,
    Literal,
}

impl PreparedMode {
    pub fn from_bool(prepared: bool) -> Self {
        if prepared {
            PreparedMode::Prepared
        } else {
            PreparedMode::Literal
        }
    }

    pub(crate) fn resolve(self, dialect_default: bool) -> bool {
        match self {
            PreparedMode::DialectDefault => dialect_default,
            PreparedMode::Prepared => true,
            PreparedMode::Literal => false,
        }
    }
}

/// Starts an INSERT against `table` on the default dialect.
pub fn insert<E: Into<Expression>>(table: E) -> InsertDataset {
    InsertDataset::new(table)
}

/// Starts an UPDATE against `table` on the default dialect.
pub fn update<E: Into<Expression>>(table: E) -> UpdateDataset {
    UpdateDataset::new(table)
}

/// Starts a DELETE against `table` on the default dialect.
pub fn delete<E: Into<Expression>>(table: E) -> DeleteDataset {
    DeleteDataset::new(table)
}

/// Starts a TRUNCATE of one or more tables on the default dialect.
pub fn truncate<I, E>(tables: I) -> TruncateDataset
where
    I: IntoIterator<Item = E>,
    E: Into<Expression>,
{
    TruncateDataset::new(tables)
}

/// Validates an expression used in table position. Only names and literal
/// fragments can stand for a table; anything else is a programming error and
/// panics at the call site rather than traveling through the error channel.
pub(crate) fn table_expression(context: &'static str, table: Expression) -> Expression {
    match table {
        Expression::Identifier(_) | Expression::Literal(_) => table,
        _ => panic!("{}", Error::UnsupportedTableArgument { context }),
    }
}

/// Like [`table_expression`] but restricted to plain identifiers.
pub(crate) fn table_identifier(context: &'static str, table: Expression) -> Identifier {
    match table {
        Expression::Identifier(ident) => ident,
        _ => panic!("{}", Error::UnsupportedTableArgument { context }),
    }
}
