use std::fmt::Write as _;

/// A bound statement value.
///
/// In prepared mode a `Param` travels next to the SQL text as a positional
/// argument; in literal mode it is inlined into the text by
/// [`write_literal`](Param::write_literal). Smaller integer and float types
/// funnel into `I64`/`F64` through the `From` impls below.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
    Null,

    #[cfg(feature = "chrono")]
    DateTime(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "chrono")]
    NaiveDate(chrono::NaiveDate),
    #[cfg(feature = "chrono")]
    NaiveDateTime(chrono::NaiveDateTime),

    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),

    #[cfg(feature = "serde_json")]
    Json(serde_json::Value),
}

impl Param {
    /// Inlines the value into `out` as a SQL literal.
    ///
    /// Strings are quoted with embedded quotes doubled; anything beyond that
    /// (charset-specific escape tables) is the executor driver's concern in
    /// prepared mode.
    pub fn write_literal(&self, out: &mut String) {
        match self {
            Param::Bool(true) => out.push_str("TRUE"),
            Param::Bool(false) => out.push_str("FALSE"),
            Param::I64(v) => {
                let mut buf = itoa::Buffer::new();
                out.push_str(buf.format(*v));
            }
            Param::F64(v) => {
                let _ = write!(out, "{v}");
            }
            Param::Str(s) => write_quoted(out, s),
            Param::Bytes(b) => {
                out.push_str("X'");
                for byte in b {
                    let _ = write!(out, "{byte:02X}");
                }
                out.push('\'');
            }
            Param::Null => out.push_str("NULL"),

            #[cfg(feature = "chrono")]
            Param::DateTime(v) => write_quoted(out, &v.to_rfc3339()),
            #[cfg(feature = "chrono")]
            Param::NaiveDate(v) => write_quoted(out, &v.to_string()),
            #[cfg(feature = "chrono")]
            Param::NaiveDateTime(v) => write_quoted(out, &v.to_string()),

            #[cfg(feature = "uuid")]
            Param::Uuid(v) => write_quoted(out, &v.hyphenated().to_string()),

            #[cfg(feature = "serde_json")]
            Param::Json(v) => write_quoted(out, &v.to_string()),
        }
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('\'');
    if s.contains('\'') {
        out.push_str(&s.replace('\'', "''"));
    } else {
        out.push_str(s);
    }
    out.push('\'');
}

// ---- From impls ----

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<i8> for Param {
    fn from(v: i8) -> Self {
        Param::I64(v.into())
    }
}
impl From<i16> for Param {
    fn from(v: i16) -> Self {
        Param::I64(v.into())
    }
}
impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::I64(v.into())
    }
}
impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::I64(v)
    }
}
impl From<u8> for Param {
    fn from(v: u8) -> Self {
        Param::I64(v.into())
    }
}
impl From<u16> for Param {
    fn from(v: u16) -> Self {
        Param::I64(v.into())
    }
}
impl From<u32> for Param {
    fn from(v: u32) -> Self {
        Param::I64(v.into())
    }
}

impl From<f32> for Param {
    fn from(v: f32) -> Self {
        Param::F64(v.into())
    }
}
impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::F64(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Str(v.to_string())
    }
}
impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Str(v)
    }
}
impl From<&String> for Param {
    fn from(v: &String) -> Self {
        Param::Str(v.clone())
    }
}
impl<'a> From<std::borrow::Cow<'a, str>> for Param {
    fn from(v: std::borrow::Cow<'a, str>) -> Self {
        Param::Str(v.into_owned())
    }
}

impl From<Vec<u8>> for Param {
    fn from(v: Vec<u8>) -> Self {
        Param::Bytes(v)
    }
}
impl From<&[u8]> for Param {
    fn from(v: &[u8]) -> Self {
        Param::Bytes(v.to_vec())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Param::Null,
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Param {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        Param::DateTime(v)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Param {
    fn from(v: chrono::NaiveDate) -> Self {
        Param::NaiveDate(v)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Param {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Param::NaiveDateTime(v)
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Param {
    fn from(v: uuid::Uuid) -> Self {
        Param::Uuid(v)
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Value> for Param {
    fn from(v: serde_json::Value) -> Self {
        Param::Json(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Param;

    fn literal(p: Param) -> String {
        let mut out = String::new();
        p.write_literal(&mut out);
        out
    }

    #[test]
    fn integers_funnel_into_i64() {
        assert_eq!(Param::from(7i16), Param::I64(7));
        assert_eq!(Param::from(7u32), Param::I64(7));
    }

    #[test]
    fn string_literals_double_embedded_quotes() {
        assert_eq!(literal(Param::from("O'Brien")), "'O''Brien'");
    }

    #[test]
    fn null_and_bool_literals() {
        assert_eq!(literal(Param::from(None::<i64>)), "NULL");
        assert_eq!(literal(Param::from(true)), "TRUE");
    }

    #[test]
    fn bytes_render_as_hex() {
        assert_eq!(literal(Param::from(vec![0xDEu8, 0xAD])), "X'DEAD'");
    }
}
