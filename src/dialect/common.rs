//! Clause fragments shared by the per-statement renderers.

use crate::clauses::Limit;
use crate::error::Error;
use crate::expression::ident::quote_part;
use crate::expression::{ColumnList, CommonTableExpression, Expression, OrderedExpression, Record};
use crate::sql_builder::SqlBuilder;

use super::{DialectOptions, Feature};

/// `WITH [RECURSIVE] name AS (...), ...` prefix, trailing space included.
pub(super) fn render_with(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    ctes: &[CommonTableExpression],
) {
    if ctes.is_empty() {
        return;
    }
    if !opts.supports(Feature::With) {
        b.set_error(unsupported(dialect, Feature::With));
        return;
    }
    let recursive = ctes.iter().any(CommonTableExpression::is_recursive);
    if recursive && !opts.supports(Feature::WithRecursive) {
        b.set_error(unsupported(dialect, Feature::WithRecursive));
        return;
    }
    b.push("WITH ");
    if recursive {
        b.push("RECURSIVE ");
    }
    for (i, cte) in ctes.iter().enumerate() {
        b.push_sep(i, ", ");
        cte.append_sql(b, opts);
    }
    b.push_char(' ');
}

/// ` WHERE a AND b`, multiple calls to the builder's `where_` joined as an
/// implicit conjunction.
pub(super) fn render_where(opts: &DialectOptions, b: &mut SqlBuilder, exprs: &[Expression]) {
    if exprs.is_empty() {
        return;
    }
    b.push(" WHERE ");
    for (i, e) in exprs.iter().enumerate() {
        b.push_sep(i, " AND ");
        e.append_sql(b, opts);
    }
}

/// ` ORDER BY ...` — silently omitted on dialects without ORDER BY on
/// mutations, matching the upstream behavior for this clause.
pub(super) fn render_order(opts: &DialectOptions, b: &mut SqlBuilder, order: &[OrderedExpression]) {
    if order.is_empty() || !opts.supports(Feature::MutationOrderLimit) {
        return;
    }
    b.push(" ORDER BY ");
    for (i, term) in order.iter().enumerate() {
        b.push_sep(i, ", ");
        term.append_sql(b, opts);
    }
}

/// ` LIMIT n` / ` LIMIT ALL` — silently omitted when unsupported, like ORDER BY.
pub(super) fn render_limit(opts: &DialectOptions, b: &mut SqlBuilder, limit: Option<Limit>) {
    let Some(limit) = limit else {
        return;
    };
    if !opts.supports(Feature::MutationOrderLimit) {
        return;
    }
    match limit {
        Limit::Count(n) => {
            b.push(" LIMIT ");
            b.push_u64(n);
        }
        Limit::All => b.push(" LIMIT ALL"),
    }
}

/// ` RETURNING ...` — a render error on dialects that cannot express it, since
/// the caller relies on the returned rows.
pub(super) fn render_returning(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    returning: Option<&ColumnList>,
) {
    let Some(returning) = returning else {
        return;
    };
    if returning.is_empty() {
        return;
    }
    if !opts.supports(Feature::Returning) {
        b.set_error(unsupported(dialect, Feature::Returning));
        return;
    }
    b.push(" RETURNING ");
    returning.append_sql(b, opts);
}

/// `col = value, ...` pairs for a SET list, in record insertion order.
pub(super) fn render_assignments(opts: &DialectOptions, b: &mut SqlBuilder, set: &Record) {
    for (i, (col, value)) in set.iter().enumerate() {
        b.push_sep(i, ", ");
        quote_part(b, col, opts);
        b.push(" = ");
        value.append_sql(b, opts);
    }
}

pub(super) fn unsupported(dialect: &str, feature: Feature) -> Error {
    Error::UnsupportedFeature {
        feature,
        dialect: dialect.to_string(),
    }
}
