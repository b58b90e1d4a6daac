use crate::clauses::TruncateClauses;
use crate::error::Error;
use crate::sql_builder::SqlBuilder;

use super::common::unsupported;
use super::{DialectOptions, Feature};

/// Options render in a fixed order regardless of how the caller assembled
/// them: table list, CASCADE or RESTRICT, then the identity keyword.
pub(super) fn render_truncate(
    dialect: &str,
    opts: &DialectOptions,
    b: &mut SqlBuilder,
    c: &TruncateClauses,
) {
    if !opts.supports(Feature::Truncate) {
        b.set_error(unsupported(dialect, Feature::Truncate));
        return;
    }
    if c.table().is_empty() {
        b.set_error(Error::MissingTable {
            statement: "TRUNCATE",
        });
        return;
    }

    b.push("TRUNCATE ");
    c.table().append_sql(b, opts);

    let options = c.options();
    if options.is_empty() {
        return;
    }
    if !opts.supports(Feature::TruncateOptions) {
        b.set_error(unsupported(dialect, Feature::TruncateOptions));
        return;
    }
    if options.cascade {
        b.push(" CASCADE");
    }
    if options.restrict {
        b.push(" RESTRICT");
    }
    if let Some(identity) = &options.identity {
        b.push_char(' ');
        b.push(&identity.to_uppercase());
        b.push(" IDENTITY");
    }
}
