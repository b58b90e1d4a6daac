//! Dialect contract and process-wide registry.
//!
//! A dialect is a named rendering strategy with one entry point per statement
//! kind. The registry is seeded with the built-ins and is expected to be
//! extended, if at all, during process initialization — register custom
//! dialects before statements are built concurrently.

mod __tests__;
mod common;
mod delete;
mod insert;
mod options;
mod truncate;
mod update;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

pub use options::{DialectOptions, Feature, PlaceholderStyle};

use crate::clauses::{DeleteClauses, InsertClauses, TruncateClauses, UpdateClauses};
use crate::sql_builder::SqlBuilder;

/// Registry name of the reserved default dialect.
pub const DEFAULT_DIALECT: &str = "default";

/// A named strategy turning clause records into SQL text and parameters.
///
/// Renderers write into the supplied [`SqlBuilder`] and report failures via
/// its sticky error rather than a return value.
pub trait SqlDialect: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn options(&self) -> &DialectOptions;

    fn supports(&self, feature: Feature) -> bool {
        self.options().supports(feature)
    }

    fn to_insert_sql(&self, b: &mut SqlBuilder, clauses: &InsertClauses);
    fn to_update_sql(&self, b: &mut SqlBuilder, clauses: &UpdateClauses);
    fn to_delete_sql(&self, b: &mut SqlBuilder, clauses: &DeleteClauses);
    fn to_truncate_sql(&self, b: &mut SqlBuilder, clauses: &TruncateClauses);
}

/// Options-driven dialect implementation backing all built-ins. Custom
/// dialects usually want this with tweaked [`DialectOptions`] rather than a
/// hand-written [`SqlDialect`] impl.
#[derive(Debug, Clone)]
pub struct CommonDialect {
    name: Cow<'static, str>,
    options: DialectOptions,
}

impl CommonDialect {
    pub fn new<S: Into<Cow<'static, str>>>(name: S, options: DialectOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

impl SqlDialect for CommonDialect {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> &DialectOptions {
        &self.options
    }

    fn to_insert_sql(&self, b: &mut SqlBuilder, clauses: &InsertClauses) {
        insert::render_insert(&self.name, &self.options, b, clauses);
    }

    fn to_update_sql(&self, b: &mut SqlBuilder, clauses: &UpdateClauses) {
        update::render_update(&self.name, &self.options, b, clauses);
    }

    fn to_delete_sql(&self, b: &mut SqlBuilder, clauses: &DeleteClauses) {
        delete::render_delete(&self.name, &self.options, b, clauses);
    }

    fn to_truncate_sql(&self, b: &mut SqlBuilder, clauses: &TruncateClauses) {
        truncate::render_truncate(&self.name, &self.options, b, clauses);
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<dyn SqlDialect>>>> = LazyLock::new(|| {
    let mut m: HashMap<String, Arc<dyn SqlDialect>> = HashMap::new();
    m.insert(
        DEFAULT_DIALECT.to_string(),
        Arc::new(CommonDialect::new(DEFAULT_DIALECT, DialectOptions::default())),
    );
    m.insert(
        "postgres".to_string(),
        Arc::new(CommonDialect::new("postgres", DialectOptions::postgres())),
    );
    m.insert(
        "mysql".to_string(),
        Arc::new(CommonDialect::new("mysql", DialectOptions::mysql())),
    );
    m.insert(
        "sqlite".to_string(),
        Arc::new(CommonDialect::new("sqlite", DialectOptions::sqlite())),
    );
    RwLock::new(m)
});

/// Registers (or replaces) a dialect under `name`. Must happen before the
/// registry is read concurrently.
pub fn register_dialect<S: Into<String>>(name: S, dialect: Arc<dyn SqlDialect>) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.into(), dialect);
}

/// Looks up a dialect by name, falling back to the reserved default entry for
/// unregistered names.
pub fn get_dialect(name: &str) -> Arc<dyn SqlDialect> {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    registry
        .get(name)
        .or_else(|| registry.get(DEFAULT_DIALECT))
        .cloned()
        .unwrap_or_else(|| Arc::new(CommonDialect::new(DEFAULT_DIALECT, DialectOptions::default())))
}

/// The reserved default dialect.
pub fn default_dialect() -> Arc<dyn SqlDialect> {
    get_dialect(DEFAULT_DIALECT)
}
