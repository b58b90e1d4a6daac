use crate::clauses::{InsertClauses, RowSource};
use crate::error::Error;
use crate::expression::ident::quote_part;
use crate::expression::{Appendable, ConflictExpression};
use crate::sql_builder::SqlBuilder;

use super::common::{render_assignments, render_returning, render_with, unsupported};
use super::{DialectOptions, Feature};

pub(super) fn render_insert(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    c: &InsertClauses,
) {
    render_with(dialect, opts, b, c.common_tables());

    let Some(into) = c.into_target() else {
        b.set_error(Error::MissingTable {
            statement: "INSERT",
        });
        return;
    };

    b.push("INSERT INTO ");
    into.append_sql(b, opts);

    if let Some(alias) = c.alias() {
        b.push(" AS ");
        alias.append_sql(b, opts);
    }

    match c.row_source() {
        RowSource::Query => render_query_source(opts, b, c),
        RowSource::Vals => render_vals(opts, b, c),
        RowSource::Rows => render_rows(opts, b, c),
        RowSource::None => b.push(" DEFAULT VALUES"),
    }

    if let Some(conflict) = c.on_conflict() {
        render_conflict(dialect, opts, b, conflict);
    }

    render_returning(dialect, opts, b, c.returning());
}

fn render_col_list(opts: &DialectOptions, b: &mut SqlBuilder, c: &InsertClauses) {
    if let Some(cols) = c.cols() {
        if !cols.is_empty() {
            b.push(" (");
            cols.append_sql(b, opts);
            b.push_char(')');
        }
    }
}

fn render_query_source(opts: &DialectOptions, b: &mut SqlBuilder, c: &InsertClauses) {
    let Some(query) = c.from() else {
        b.set_error(Error::invalid("insert row source is missing"));
        return;
    };
    render_col_list(opts, b, c);
    b.push_char(' ');
    query.append_sql(b);
}

fn render_vals(opts: &DialectOptions, b: &mut SqlBuilder, c: &InsertClauses) {
    let Some(vals) = c.vals() else {
        b.set_error(Error::invalid("insert has no value rows"));
        return;
    };
    if vals.is_empty() {
        b.set_error(Error::invalid("insert has no value rows"));
        return;
    }

    let expected = c
        .cols()
        .filter(|cols| !cols.is_empty())
        .map(|cols| cols.len())
        .unwrap_or_else(|| vals[0].len());
    render_col_list(opts, b, c);

    b.push(" VALUES ");
    for (i, row) in vals.iter().enumerate() {
        if row.len() != expected {
            b.set_error(Error::MismatchedRowLength {
                expected,
                got: row.len(),
            });
            return;
        }
        b.push_sep(i, ", ");
        b.push_char('(');
        for (j, v) in row.iter().enumerate() {
            b.push_sep(j, ", ");
            b.push_value(v);
        }
        b.push_char(')');
    }
}

/// Record rows: the column list comes from the first record in insertion
/// order, every later record must supply exactly the same columns.
fn render_rows(opts: &DialectOptions, b: &mut SqlBuilder, c: &InsertClauses) {
    let Some(rows) = c.rows() else {
        b.set_error(Error::invalid("insert has no record rows"));
        return;
    };
    let Some(first) = rows.first() else {
        b.set_error(Error::invalid("insert has no record rows"));
        return;
    };
    if first.is_empty() {
        b.set_error(Error::invalid("insert record has no columns"));
        return;
    }

    let columns: Vec<&str> = first.columns().collect();
    b.push(" (");
    for (i, col) in columns.iter().enumerate() {
        b.push_sep(i, ", ");
        quote_part(b, col, opts);
    }
    b.push_char(')');

    b.push(" VALUES ");
    for (i, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            b.set_error(Error::MismatchedRowLength {
                expected: columns.len(),
                got: row.len(),
            });
            return;
        }
        b.push_sep(i, ", ");
        b.push_char('(');
        for (j, col) in columns.iter().enumerate() {
            b.push_sep(j, ", ");
            match row.get(col) {
                Some(value) => value.append_sql(b, opts),
                None => {
                    b.set_error(Error::invalid(format!(
                        "insert record is missing column {col:?}"
                    )));
                    return;
                }
            }
        }
        b.push_char(')');
    }
}

fn render_conflict(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    conflict: &ConflictExpression,
) {
    if !opts.supports(Feature::ConflictClause) {
        b.set_error(unsupported(dialect, Feature::ConflictClause));
        return;
    }
    match conflict {
        ConflictExpression::DoNothing { target } => {
            b.push(" ON CONFLICT");
            if let Some(target) = target {
                b.push(" (");
                b.push(target);
                b.push_char(')');
            }
            b.push(" DO NOTHING");
        }
        ConflictExpression::DoUpdate {
            target,
            set,
            where_clause,
        } => {
            b.push(" ON CONFLICT (");
            b.push(target);
            b.push(") DO UPDATE SET ");
            render_assignments(opts, b, set);
            if let Some(predicate) = where_clause {
                b.push(" WHERE ");
                predicate.append_sql(b, opts);
            }
        }
    }
}
