use smallvec::SmallVec;

use crate::dialect::DialectOptions;
use crate::sql_builder::SqlBuilder;

/// A possibly qualified identifier: `column`, `table.column` or
/// `schema.table.column`. Parts are quoted per dialect at render time; a `*`
/// part is passed through unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    parts: SmallVec<[String; 3]>,
}

impl Identifier {
    pub fn new<S: Into<String>>(part: S) -> Self {
        let mut parts = SmallVec::new();
        parts.push(part.into());
        Self { parts }
    }

    /// Splits a dotted path into its parts: `"public.users"` becomes the
    /// qualified identifier `public`.`users`.
    pub fn parse(s: &str) -> Self {
        Self {
            parts: s.split('.').map(str::to_string).collect(),
        }
    }

    pub fn qualified<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(String::as_str)
    }

    /// Last path segment, i.e. the column for `table.column`.
    pub fn last(&self) -> &str {
        self.parts.last().map(String::as_str).unwrap_or_default()
    }

    pub(crate) fn append_sql(&self, b: &mut SqlBuilder, opts: &DialectOptions) {
        for (i, part) in self.parts.iter().enumerate() {
            b.push_sep(i, ".");
            if part == "*" {
                b.push_char('*');
            } else {
                quote_part(b, part, opts);
            }
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::parse(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::parse(&s)
    }
}

/// Quotes one path segment, doubling embedded closing quotes.
pub(crate) fn quote_part(b: &mut SqlBuilder, part: &str, opts: &DialectOptions) {
    b.push_char(opts.quote_left);
    if part.contains(opts.quote_right) {
        let doubled: String = part
            .chars()
            .flat_map(|c| {
                let n = if c == opts.quote_right { 2 } else { 1 };
                std::iter::repeat_n(c, n)
            })
            .collect();
        b.push(doubled);
    } else {
        b.push(part);
    }
    b.push_char(opts.quote_right);
}
