use crate::expression::ColumnList;

/// CASCADE/RESTRICT/identity options on a TRUNCATE, replaced wholesale by
/// [`TruncateClauses::set_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruncateOptions {
    pub cascade: bool,
    pub restrict: bool,
    /// Dialect-interpreted identity option, e.g. `"restart"` or `"continue"`.
    pub identity: Option<String>,
}

impl TruncateOptions {
    pub fn is_empty(&self) -> bool {
        !self.cascade && !self.restrict && self.identity.is_none()
    }
}

/// Structured clause data for a TRUNCATE statement.
#[derive(Debug, Clone, Default)]
pub struct TruncateClauses {
    table: ColumnList,
    options: TruncateOptions,
}

impl TruncateClauses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &ColumnList {
        &self.table
    }

    pub fn options(&self) -> &TruncateOptions {
        &self.options
    }

    pub fn set_table(&self, table: ColumnList) -> Self {
        let mut c = self.clone();
        c.table = table;
        c
    }

    pub fn set_options(&self, options: TruncateOptions) -> Self {
        let mut c = self.clone();
        c.options = options;
        c
    }
}
