use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` (MySQL/SQLite)
    Question,
    /// `$1, $2, $3...` (Postgres)
    Numbered,
}

/// Optional statement features a dialect may or may not render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Returning,
    ConflictClause,
    With,
    WithRecursive,
    UpdateFrom,
    MutationOrderLimit,
    Truncate,
    TruncateOptions,
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Feature::Returning => "RETURNING",
            Feature::ConflictClause => "ON CONFLICT",
            Feature::With => "WITH",
            Feature::WithRecursive => "WITH RECURSIVE",
            Feature::UpdateFrom => "UPDATE ... FROM",
            Feature::MutationOrderLimit => "ORDER BY/LIMIT on UPDATE/DELETE",
            Feature::Truncate => "TRUNCATE",
            Feature::TruncateOptions => "TRUNCATE options",
        };
        f.write_str(s)
    }
}

/// Rendering knobs consumed by the options-driven [`CommonDialect`].
///
/// [`CommonDialect`]: crate::dialect::CommonDialect
#[derive(Clone, Copy, Debug)]
pub struct DialectOptions {
    pub placeholder: PlaceholderStyle,
    pub quote_left: char,
    pub quote_right: char,

    /// Prepared-mode default applied when a dataset carries no explicit
    /// `prepared(..)` preference.
    pub default_prepared: bool,

    pub supports_returning: bool,
    pub supports_conflict_clause: bool,
    pub supports_with: bool,
    pub supports_with_recursive: bool,
    pub supports_update_from: bool,
    pub supports_mutation_order_limit: bool,
    pub supports_truncate: bool,
    pub supports_truncate_options: bool,
}

impl Default for DialectOptions {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderStyle::Question,
            quote_left: '"',
            quote_right: '"',
            default_prepared: false,
            supports_returning: true,
            supports_conflict_clause: true,
            supports_with: true,
            supports_with_recursive: true,
            supports_update_from: true,
            supports_mutation_order_limit: true,
            supports_truncate: true,
            supports_truncate_options: true,
        }
    }
}

impl DialectOptions {
    pub fn postgres() -> Self {
        Self {
            placeholder: PlaceholderStyle::Numbered,
            supports_mutation_order_limit: false,
            ..Self::default()
        }
    }

    pub fn mysql() -> Self {
        Self {
            quote_left: '`',
            quote_right: '`',
            supports_returning: false,
            supports_conflict_clause: false,
            supports_with_recursive: false,
            supports_update_from: false,
            supports_truncate_options: false,
            ..Self::default()
        }
    }

    pub fn sqlite() -> Self {
        Self {
            supports_update_from: false,
            supports_mutation_order_limit: false,
            supports_truncate: false,
            supports_truncate_options: false,
            ..Self::default()
        }
    }

    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::Returning => self.supports_returning,
            Feature::ConflictClause => self.supports_conflict_clause,
            Feature::With => self.supports_with,
            Feature::WithRecursive => self.supports_with_recursive,
            Feature::UpdateFrom => self.supports_update_from,
            Feature::MutationOrderLimit => self.supports_mutation_order_limit,
            Feature::Truncate => self.supports_truncate,
            Feature::TruncateOptions => self.supports_truncate_options,
        }
    }
}
