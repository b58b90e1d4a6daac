//! Statement execution over an sqlx connection pool.
//!
//! The database driver is chosen at compile time through exactly one of the
//! `postgres`, `mysql` and `sqlite` features; [`DbPool`] and [`DbRow`] alias
//! the active driver's types.

mod config;
mod error;

#[cfg(feature = "mysql")]
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
#[cfg(feature = "postgres")]
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
#[cfg(feature = "sqlite")]
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};

use crate::dataset::{DeleteDataset, InsertDataset, TruncateDataset, UpdateDataset};
use crate::expression::Expression;
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

pub use config::{ExecutorConfig, ExecutorConfigBuilder};
pub use error::{Error, Result};

#[cfg(feature = "postgres")]
pub type DbRow = PgRow;
#[cfg(feature = "mysql")]
pub type DbRow = MySqlRow;
#[cfg(feature = "sqlite")]
pub type DbRow = SqliteRow;

#[cfg(feature = "postgres")]
type DbDriver = sqlx::Postgres;
#[cfg(feature = "mysql")]
type DbDriver = sqlx::MySql;
#[cfg(feature = "sqlite")]
type DbDriver = sqlx::Sqlite;

#[derive(Clone, Debug)]
pub enum DbPool {
    #[cfg(feature = "postgres")]
    Postgres(PgPool),
    #[cfg(feature = "mysql")]
    MySql(MySqlPool),
    #[cfg(feature = "sqlite")]
    Sqlite(SqlitePool),
}

/// Entry point for pool-attached datasets: statements started from a
/// [`Database`] carry its pool, so their [`executor`](InsertDataset::executor)
/// can run without further wiring.
#[derive(Clone, Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Connects using `cfg`: a ready-made pool is wrapped as-is, otherwise a
    /// pool is built from `database_url` (whose query string may carry pool
    /// knobs, see [`ExecutorConfig::from_dsn`]).
    pub async fn connect(cfg: ExecutorConfig) -> Result<Self> {
        let cfg = if let Some(ref dsn) = cfg.database_url {
            let from_dsn = ExecutorConfig::from_dsn(dsn)?;
            // builder fields win over DSN parameters
            cfg.merge_override(from_dsn)
        } else {
            cfg
        };

        if let Some(pool) = cfg.pool.clone() {
            return Ok(Self { pool });
        }

        let url = cfg.database_url.clone().ok_or(Error::MissingConnection)?;
        let scheme = url::Url::parse(&url)?.scheme().to_string();

        let max_conn = cfg.max_connections.unwrap_or(10);
        let min_conn = cfg.min_connections.unwrap_or(0);
        let test_before = cfg.test_before_acquire.unwrap_or(false);

        let pool = match scheme.as_str() {
            #[cfg(feature = "postgres")]
            "postgres" | "postgresql" => {
                let mut opts = PgPoolOptions::new()
                    .max_connections(max_conn)
                    .min_connections(min_conn)
                    .test_before_acquire(test_before);
                if let Some(d) = cfg.acquire_timeout {
                    opts = opts.acquire_timeout(d);
                }
                if let Some(d) = cfg.idle_timeout {
                    opts = opts.idle_timeout(d);
                }
                if let Some(d) = cfg.max_lifetime {
                    opts = opts.max_lifetime(d);
                }
                DbPool::Postgres(opts.connect(&url).await?)
            }

            #[cfg(feature = "mysql")]
            "mysql" | "mariadb" => {
                let mut opts = MySqlPoolOptions::new()
                    .max_connections(max_conn)
                    .min_connections(min_conn)
                    .test_before_acquire(test_before);
                if let Some(d) = cfg.acquire_timeout {
                    opts = opts.acquire_timeout(d);
                }
                if let Some(d) = cfg.idle_timeout {
                    opts = opts.idle_timeout(d);
                }
                if let Some(d) = cfg.max_lifetime {
                    opts = opts.max_lifetime(d);
                }
                DbPool::MySql(opts.connect(&url).await?)
            }

            #[cfg(feature = "sqlite")]
            "sqlite" => {
                let mut opts = SqlitePoolOptions::new()
                    .max_connections(max_conn)
                    .min_connections(min_conn)
                    .test_before_acquire(test_before);
                if let Some(d) = cfg.acquire_timeout {
                    opts = opts.acquire_timeout(d);
                }
                if let Some(d) = cfg.idle_timeout {
                    opts = opts.idle_timeout(d);
                }
                if let Some(d) = cfg.max_lifetime {
                    opts = opts.max_lifetime(d);
                }
                DbPool::Sqlite(opts.connect(&url).await?)
            }

            _ => return Err(Error::UnsupportedScheme(scheme)),
        };

        Ok(Self { pool })
    }

    /// Wraps an already-built pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn insert<E: Into<Expression>>(&self, table: E) -> InsertDataset {
        crate::dataset::insert(table).with_pool(self.pool.clone())
    }

    pub fn update<E: Into<Expression>>(&self, table: E) -> UpdateDataset {
        crate::dataset::update(table).with_pool(self.pool.clone())
    }

    pub fn delete<E: Into<Expression>>(&self, table: E) -> DeleteDataset {
        crate::dataset::delete(table).with_pool(self.pool.clone())
    }

    pub fn truncate<I, E>(&self, tables: I) -> TruncateDataset
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        crate::dataset::truncate(tables).with_pool(self.pool.clone())
    }
}

/// One-shot executor over a rendered statement.
///
/// Rendering errors travel here from the dataset's sticky channel and are
/// reported by whichever call first needs the SQL.
#[derive(Debug)]
pub struct QueryExecutor {
    pool: Option<DbPool>,
    rendered: crate::error::Result<(String, Vec<Param>)>,
}

impl QueryExecutor {
    pub(crate) fn from_sql_builder(b: SqlBuilder, pool: Option<DbPool>) -> Self {
        Self {
            pool,
            rendered: b.finish(),
        }
    }

    pub fn sql(&self) -> Result<&str> {
        match &self.rendered {
            Ok((sql, _)) => Ok(sql),
            Err(err) => Err(Error::Build(err.clone())),
        }
    }

    pub fn params(&self) -> Result<&[Param]> {
        match &self.rendered {
            Ok((_, params)) => Ok(params),
            Err(err) => Err(Error::Build(err.clone())),
        }
    }

    fn rendered(&self) -> Result<(&str, &[Param])> {
        match &self.rendered {
            Ok((sql, params)) => Ok((sql, params)),
            Err(err) => Err(Error::Build(err.clone())),
        }
    }

    fn pool(&self) -> Result<&DbPool> {
        self.pool.as_ref().ok_or(Error::MissingConnection)
    }

    /// Runs the statement, returning the affected row count.
    pub async fn execute(&self) -> Result<u64> {
        let (sql, params) = self.rendered()?;
        let pool = self.pool()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(sql, params = params.len(), "executing statement");
        let q = bind_all(sql, params);
        let result = match pool {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => q.execute(pool).await?.rows_affected(),
            #[cfg(feature = "mysql")]
            DbPool::MySql(pool) => q.execute(pool).await?.rows_affected(),
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => q.execute(pool).await?.rows_affected(),
        };
        Ok(result)
    }

    /// Runs the statement and collects all rows, typically paired with a
    /// RETURNING clause.
    pub async fn fetch_all(&self) -> Result<Vec<DbRow>> {
        let (sql, params) = self.rendered()?;
        let pool = self.pool()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(sql, params = params.len(), "fetching statement rows");
        let q = bind_all(sql, params);
        let rows = match pool {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => q.fetch_all(pool).await?,
            #[cfg(feature = "mysql")]
            DbPool::MySql(pool) => q.fetch_all(pool).await?,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => q.fetch_all(pool).await?,
        };
        Ok(rows)
    }

    /// Like [`fetch_all`](Self::fetch_all) but mapped through `FromRow`.
    pub async fn fetch_typed<T>(&self) -> Result<Vec<T>>
    where
        for<'r> T: sqlx::FromRow<'r, DbRow> + Send + Unpin,
    {
        let rows = self.fetch_all().await?;
        rows.iter()
            .map(|row| T::from_row(row).map_err(Error::from))
            .collect()
    }
}

fn bind_all<'q>(
    sql: &'q str,
    params: &'q [Param],
) -> sqlx::query::Query<'q, DbDriver, <DbDriver as sqlx::Database>::Arguments<'q>> {
    let mut q = sqlx::query(sql);
    for p in params {
        q = match p {
            Param::Bool(v) => q.bind(*v),
            Param::I64(v) => q.bind(*v),
            Param::F64(v) => q.bind(*v),
            Param::Str(v) => q.bind(v.as_str()),
            Param::Bytes(v) => q.bind(v.as_slice()),
            Param::Null => q.bind(None::<&str>),

            #[cfg(feature = "chrono")]
            Param::DateTime(v) => q.bind(*v),
            #[cfg(feature = "chrono")]
            Param::NaiveDate(v) => q.bind(*v),
            #[cfg(feature = "chrono")]
            Param::NaiveDateTime(v) => q.bind(*v),

            #[cfg(feature = "uuid")]
            Param::Uuid(v) => q.bind(*v),

            #[cfg(feature = "serde_json")]
            Param::Json(v) => q.bind(v.clone()),
        };
    }
    q
}
