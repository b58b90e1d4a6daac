use crate::dialect::DialectOptions;
use crate::error::Error;
use crate::expression::Identifier;
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

/// Comparison predicates used in WHERE clauses and conflict-update filters.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub lhs: Identifier,
    pub op: BinaryOp,
    pub rhs: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Param),
    Column(Identifier),
    /// Value list for `IN`/`NOT IN`.
    Values(Vec<Param>),
    /// Unary operators (`IS NULL`).
    None,
}

impl BinaryOp {
    fn fragment(self) -> &'static str {
        match self {
            BinaryOp::Eq => " = ",
            BinaryOp::Neq => " != ",
            BinaryOp::Gt => " > ",
            BinaryOp::Gte => " >= ",
            BinaryOp::Lt => " < ",
            BinaryOp::Lte => " <= ",
            BinaryOp::Like => " LIKE ",
            BinaryOp::NotLike => " NOT LIKE ",
            BinaryOp::In => " IN ",
            BinaryOp::NotIn => " NOT IN ",
            BinaryOp::IsNull => " IS NULL",
            BinaryOp::IsNotNull => " IS NOT NULL",
        }
    }
}

impl BinaryExpression {
    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, opts: &DialectOptions) {
        self.lhs.append_sql(b, opts);
        b.push(self.op.fragment());
        match &self.rhs {
            Operand::Value(v) => b.push_value(v),
            Operand::Column(ident) => ident.append_sql(b, opts),
            Operand::Values(vals) => {
                if vals.is_empty() {
                    b.set_error(Error::invalid("IN list has no values"));
                    return;
                }
                b.push_char('(');
                for (i, v) in vals.iter().enumerate() {
                    b.push_sep(i, ", ");
                    b.push_value(v);
                }
                b.push_char(')');
            }
            Operand::None => {}
        }
    }
}
