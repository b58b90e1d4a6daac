use std::borrow::Cow;

use crate::dialect::DialectOptions;
use crate::error::Error;
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

/// An opaque SQL fragment inserted verbatim, with optional `?` slots that are
/// filled from bound values at render time. The escape hatch for SQL the
/// expression model cannot otherwise express.
#[derive(Debug, Clone)]
pub struct Literal {
    fragment: Cow<'static, str>,
    args: Vec<Param>,
}

impl Literal {
    pub fn new<S: Into<Cow<'static, str>>>(fragment: S) -> Self {
        Self {
            fragment: fragment.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<S, I, P>(fragment: S, args: I) -> Self
    where
        S: Into<Cow<'static, str>>,
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        Self {
            fragment: fragment.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, _opts: &DialectOptions) {
        let slots = self.fragment.matches('?').count();
        if slots != self.args.len() {
            b.set_error(Error::invalid(format!(
                "literal {:?} has {} placeholder slots but {} bound values",
                self.fragment,
                slots,
                self.args.len()
            )));
            return;
        }
        let mut pieces = self.fragment.split('?');
        if let Some(first) = pieces.next() {
            b.push(first);
        }
        for (piece, arg) in pieces.zip(self.args.iter()) {
            b.push_value(arg);
            b.push(piece);
        }
    }
}
