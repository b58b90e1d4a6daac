use crate::clauses::UpdateClauses;
use crate::error::Error;
use crate::sql_builder::SqlBuilder;

use super::common::{
    render_assignments, render_limit, render_order, render_returning, render_where, render_with,
    unsupported,
};
use super::{DialectOptions, Feature};

pub(super) fn render_update(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    c: &UpdateClauses,
) {
    render_with(dialect, opts, b, c.common_tables());

    let Some(table) = c.table() else {
        b.set_error(Error::MissingTable {
            statement: "UPDATE",
        });
        return;
    };

    b.push("UPDATE ");
    table.append_sql(b, opts);

    let has_set = c.set_values().is_some_and(|set| !set.is_empty());
    if !has_set {
        b.set_error(Error::EmptySetClause);
        return;
    }
    b.push(" SET ");
    if let Some(set) = c.set_values() {
        render_assignments(opts, b, set);
    }

    if let Some(from) = c.from() {
        if !from.is_empty() {
            if !opts.supports(Feature::UpdateFrom) {
                b.set_error(unsupported(dialect, Feature::UpdateFrom));
                return;
            }
            b.push(" FROM ");
            from.append_sql(b, opts);
        }
    }

    render_where(opts, b, c.where_clause());
    render_order(opts, b, c.order());
    render_limit(opts, b, c.limit());
    render_returning(dialect, opts, b, c.returning());
}
