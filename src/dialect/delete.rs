use crate::clauses::DeleteClauses;
use crate::error::Error;
use crate::sql_builder::SqlBuilder;

use super::common::{render_limit, render_order, render_returning, render_where, render_with};
use super::DialectOptions;

pub(super) fn render_delete(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    c: &DeleteClauses,
) {
    render_with(dialect, opts, b, c.common_tables());

    let Some(from) = c.from() else {
        b.set_error(Error::MissingTable {
            statement: "DELETE",
        });
        return;
    };

    b.push("DELETE FROM ");
    from.append_sql(b, opts);

    render_where(opts, b, c.where_clause());
    render_order(opts, b, c.order());
    render_limit(opts, b, c.limit());
    render_returning(dialect, opts, b, c.returning());
}
