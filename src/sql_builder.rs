use crate::dialect::PlaceholderStyle;
use crate::error::{Error, Result};
use crate::param::Param;

/// Single-use text-and-parameter sink for one rendering pass.
///
/// The builder is sticky on error: once [`set_error`](SqlBuilder::set_error)
/// has been called, every later write is a no-op and
/// [`finish`](SqlBuilder::finish) reports the first recorded error instead of
/// a partially written statement. Rendering code therefore never checks for
/// errors between writes.
#[derive(Debug)]
pub struct SqlBuilder {
    buf: String,
    params: Vec<Param>,
    prepared: bool,
    placeholder: PlaceholderStyle,
    // 1-based, used for $1/$2...; untouched by '?'
    next_param_idx: usize,
    err: Option<Error>,
}

impl SqlBuilder {
    pub fn new(prepared: bool, placeholder: PlaceholderStyle) -> Self {
        Self {
            buf: String::with_capacity(128),
            params: Vec::new(),
            prepared,
            placeholder,
            next_param_idx: 1,
            err: None,
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Appends a raw SQL fragment.
    #[inline]
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        if self.err.is_none() {
            self.buf.push_str(s.as_ref());
        }
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        if self.err.is_none() {
            self.buf.push(c);
        }
    }

    /// Appends `sep` before every element but the first.
    #[inline]
    pub fn push_sep(&mut self, i: usize, sep: &str) {
        if i > 0 {
            self.push(sep);
        }
    }

    #[inline]
    pub fn push_u64(&mut self, v: u64) {
        if self.err.is_none() {
            let mut buf = itoa::Buffer::new();
            self.buf.push_str(buf.format(v));
        }
    }

    /// Appends a bound value.
    ///
    /// In prepared mode this writes a placeholder token (numbered styles
    /// increment the counter) and records the value in the parameter sequence;
    /// in literal mode the value is inlined into the text.
    pub fn push_value(&mut self, v: &Param) {
        if self.err.is_some() {
            return;
        }
        if self.prepared {
            match self.placeholder {
                PlaceholderStyle::Question => self.buf.push('?'),
                PlaceholderStyle::Numbered => {
                    let i = self.next_param_idx;
                    self.next_param_idx += 1;
                    self.buf.push('$');
                    let mut buf = itoa::Buffer::new();
                    self.buf.push_str(buf.format(i));
                }
            }
            self.params.push(v.clone());
        } else {
            v.write_literal(&mut self.buf);
        }
    }

    /// Records the first error; later calls keep the original.
    pub fn set_error(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Consumes the builder, returning the accumulated text and parameters or
    /// the first recorded error.
    pub fn finish(self) -> Result<(String, Vec<Param>)> {
        match self.err {
            Some(err) => Err(err),
            None => Ok((self.buf, self.params)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_accumulate_in_order() {
        let mut b = SqlBuilder::new(true, PlaceholderStyle::Numbered);
        b.push("SELECT ");
        b.push_value(&Param::I64(1));
        b.push(", ");
        b.push_value(&Param::from("a"));
        let (sql, params) = b.finish().expect("finish");
        assert_eq!(sql, "SELECT $1, $2");
        assert_eq!(params, vec![Param::I64(1), Param::Str("a".into())]);
    }

    #[test]
    fn literal_mode_inlines_values() {
        let mut b = SqlBuilder::new(false, PlaceholderStyle::Question);
        b.push_value(&Param::from("it's"));
        let (sql, params) = b.finish().expect("finish");
        assert_eq!(sql, "'it''s'");
        assert!(params.is_empty());
    }

    #[test]
    fn first_error_poisons_all_later_writes() {
        let mut b = SqlBuilder::new(true, PlaceholderStyle::Question);
        b.push("DELETE");
        b.set_error(Error::message("boom"));
        b.set_error(Error::message("later"));
        b.push(" FROM t");
        b.push_value(&Param::I64(5));
        assert_eq!(b.finish(), Err(Error::message("boom")));
    }
}
