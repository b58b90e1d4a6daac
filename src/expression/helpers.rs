//! Free-function constructors for expression nodes.
//!
//! Bare strings in identifier positions are parsed as (possibly dotted)
//! identifiers; bound values always go through [`Param`].

use std::borrow::Cow;

use crate::expression::{
    BinaryExpression, BinaryOp, ConflictExpression, Expression, Identifier, Literal, Operand,
    OrderedExpression, Record, SortDirection,
};
use crate::param::Param;

/// Column reference: `col("users.id")`.
pub fn col(name: &str) -> Expression {
    Expression::Identifier(Identifier::parse(name))
}

/// Table reference, possibly schema-qualified: `table("public.users")`.
pub fn table(name: &str) -> Expression {
    Expression::Identifier(Identifier::parse(name))
}

/// A bound value.
pub fn val<P: Into<Param>>(v: P) -> Expression {
    Expression::Value(v.into())
}

/// Verbatim SQL fragment. Prefer `val`/the comparison helpers; this bypasses
/// quoting entirely.
pub fn lit<S: Into<Cow<'static, str>>>(fragment: S) -> Expression {
    Expression::Literal(Literal::new(fragment))
}

/// Verbatim SQL fragment with `?` slots bound to values:
/// `lit_args("price * ?", [2])`.
pub fn lit_args<S, I, P>(fragment: S, args: I) -> Expression
where
    S: Into<Cow<'static, str>>,
    I: IntoIterator<Item = P>,
    P: Into<Param>,
{
    Expression::Literal(Literal::with_args(fragment, args))
}

fn binary(column: &str, op: BinaryOp, rhs: Operand) -> Expression {
    Expression::Binary(Box::new(BinaryExpression {
        lhs: Identifier::parse(column),
        op,
        rhs,
    }))
}

pub fn eq<P: Into<Param>>(column: &str, value: P) -> Expression {
    binary(column, BinaryOp::Eq, Operand::Value(value.into()))
}

pub fn neq<P: Into<Param>>(column: &str, value: P) -> Expression {
    binary(column, BinaryOp::Neq, Operand::Value(value.into()))
}

pub fn gt<P: Into<Param>>(column: &str, value: P) -> Expression {
    binary(column, BinaryOp::Gt, Operand::Value(value.into()))
}

pub fn gte<P: Into<Param>>(column: &str, value: P) -> Expression {
    binary(column, BinaryOp::Gte, Operand::Value(value.into()))
}

pub fn lt<P: Into<Param>>(column: &str, value: P) -> Expression {
    binary(column, BinaryOp::Lt, Operand::Value(value.into()))
}

pub fn lte<P: Into<Param>>(column: &str, value: P) -> Expression {
    binary(column, BinaryOp::Lte, Operand::Value(value.into()))
}

pub fn like<P: Into<Param>>(column: &str, pattern: P) -> Expression {
    binary(column, BinaryOp::Like, Operand::Value(pattern.into()))
}

pub fn not_like<P: Into<Param>>(column: &str, pattern: P) -> Expression {
    binary(column, BinaryOp::NotLike, Operand::Value(pattern.into()))
}

pub fn in_list<I, P>(column: &str, values: I) -> Expression
where
    I: IntoIterator<Item = P>,
    P: Into<Param>,
{
    binary(
        column,
        BinaryOp::In,
        Operand::Values(values.into_iter().map(Into::into).collect()),
    )
}

pub fn not_in<I, P>(column: &str, values: I) -> Expression
where
    I: IntoIterator<Item = P>,
    P: Into<Param>,
{
    binary(
        column,
        BinaryOp::NotIn,
        Operand::Values(values.into_iter().map(Into::into).collect()),
    )
}

pub fn is_null(column: &str) -> Expression {
    binary(column, BinaryOp::IsNull, Operand::None)
}

pub fn is_not_null(column: &str) -> Expression {
    binary(column, BinaryOp::IsNotNull, Operand::None)
}

/// `column = other_column` comparison, both sides quoted as identifiers.
pub fn eq_col(column: &str, other: &str) -> Expression {
    binary(
        column,
        BinaryOp::Eq,
        Operand::Column(Identifier::parse(other)),
    )
}

pub fn asc(column: &str) -> OrderedExpression {
    OrderedExpression::new(column, SortDirection::Asc)
}

pub fn desc(column: &str) -> OrderedExpression {
    OrderedExpression::new(column, SortDirection::Desc)
}

/// Reference to the would-be-inserted row inside a conflict update:
/// `excluded("name")` renders as `"excluded"."name"`.
pub fn excluded(column: &str) -> Expression {
    Expression::Identifier(Identifier::qualified(["excluded", column]))
}

/// `ON CONFLICT DO NOTHING`.
pub fn do_nothing() -> ConflictExpression {
    ConflictExpression::do_nothing()
}

/// `ON CONFLICT (target) DO UPDATE SET ...`.
pub fn do_update<S: Into<String>>(target: S, set: Record) -> ConflictExpression {
    ConflictExpression::do_update(target, set)
}
