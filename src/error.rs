use std::borrow::Cow;

use crate::dialect::Feature;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced while assembling or rendering a statement.
///
/// Two classes share this type but propagate differently: programmer misuse
/// (`UnsupportedTableArgument`, `IncompatibleDialects`) is raised as a panic at
/// the offending call, everything else travels through the sticky-error slot of
/// a dataset or [`SqlBuilder`](crate::SqlBuilder) and is reported by the next
/// terminal operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The argument cannot name a table in this position.
    #[error("unsupported table argument for {context}, a name or identifier expression is required")]
    UnsupportedTableArgument { context: &'static str },

    /// An INSERT and its row source were built against different non-default dialects.
    #[error("incompatible dialects for INSERT ({outer}) and row source ({inner})")]
    IncompatibleDialects { outer: String, inner: String },

    #[error("feature {feature} is not supported by dialect {dialect}")]
    UnsupportedFeature { feature: Feature, dialect: String },

    #[error("{statement} statement requires a table")]
    MissingTable { statement: &'static str },

    #[error("update statement has no SET values")]
    EmptySetClause,

    #[error("rows with different value length, expected {expected} got {got}")]
    MismatchedRowLength { expected: usize, got: usize },

    #[error("invalid expression: {reason}")]
    InvalidExpression { reason: Cow<'static, str> },

    /// A caller-recorded error carried through the sticky channel.
    #[error("{0}")]
    Message(Cow<'static, str>),
}

impl Error {
    /// Free-form error for `set_error`, recorded while building up a statement.
    pub fn message<S: Into<Cow<'static, str>>>(msg: S) -> Self {
        Error::Message(msg.into())
    }

    pub(crate) fn invalid<S: Into<Cow<'static, str>>>(reason: S) -> Self {
        Error::InvalidExpression {
            reason: reason.into(),
        }
    }
}
