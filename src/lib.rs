//! Immutable SQL statement builders for INSERT, UPDATE, DELETE and TRUNCATE.
//!
//! Statements are assembled through copy-on-write datasets: every mutator
//! returns a new dataset, so a base statement can branch into variants without
//! the branches affecting each other. Rendering is dialect-driven; built-in
//! dialects cover Postgres, MySQL and SQLite, and custom ones can be added to
//! the process-wide registry.
//!
//! ```no_run
//! use sqlforge::{insert, Record};
//!
//! let (sql, params) = insert("users")
//!     .with_dialect("postgres")
//!     .rows([Record::new().set("name", "Bob").set("age", 30_i64)])
//!     .prepared(true)
//!     .to_sql()
//!     .expect("render");
//! assert_eq!(sql, r#"INSERT INTO "users" ("name", "age") VALUES ($1, $2)"#);
//! assert_eq!(params.len(), 2);
//! ```

pub mod clauses;
pub mod dataset;
pub mod dialect;
mod error;
pub mod executor;
pub mod expression;
mod param;
mod sql_builder;

pub use dataset::{
    delete, insert, truncate, update, DeleteDataset, InsertDataset, PreparedMode, TruncateDataset,
    UpdateDataset,
};
pub use dialect::{
    default_dialect, get_dialect, register_dialect, CommonDialect, DialectOptions, Feature,
    PlaceholderStyle, SqlDialect, DEFAULT_DIALECT,
};
pub use error::{Error, Result};
pub use executor::{Database, DbPool, DbRow, ExecutorConfig, QueryExecutor};
pub use expression::helpers::*;
pub use expression::{
    Appendable, BinaryExpression, BinaryOp, ColumnList, CommonTableExpression, ConflictExpression,
    Expression, Identifier, Literal, NullOrdering, Operand, OrderedExpression, Record,
    SortDirection, SqlQuery, Subquery,
};
pub use param::Param;
pub use sql_builder::SqlBuilder;

#[cfg(not(any(feature = "postgres", feature = "mysql", feature = "sqlite")))]
compile_error!("Enable exactly one DB feature: `postgres`, `mysql`, or `sqlite`.");

#[cfg(all(feature = "postgres", any(feature = "mysql", feature = "sqlite")))]
compile_error!("Enable only one DB feature at a time (postgres vs mysql/sqlite).");

#[cfg(all(feature = "mysql", feature = "sqlite"))]
compile_error!("Enable only one DB feature at a time (mysql vs sqlite).");
