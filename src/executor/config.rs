use std::borrow::Cow;
use std::time::Duration;

use url::Url;

use super::{DbPool, Error, Result};

/// Connection settings for [`Database::connect`](super::Database::connect).
///
/// Either a `database_url` (a pool is built from it) or a ready-made `pool`
/// must be supplied. Pool knobs can come from the builder or be embedded in
/// the DSN's query string; builder fields win on conflict.
#[derive(Clone, Debug)]
pub struct ExecutorConfig {
    pub database_url: Option<String>,
    pub pool: Option<DbPool>,

    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout: Option<Duration>,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub test_before_acquire: Option<bool>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            pool: None,
            max_connections: None,
            min_connections: None,
            acquire_timeout: None,
            idle_timeout: Some(Duration::from_secs(30)),
            max_lifetime: Some(Duration::from_secs(60 * 60)),
            test_before_acquire: None,
        }
    }
}

impl ExecutorConfig {
    pub fn builder() -> ExecutorConfigBuilder {
        ExecutorConfigBuilder {
            cfg: ExecutorConfig::default(),
        }
    }

    /// Builds a config from a DSN, recognizing pool knobs in the query
    /// string: `pool.max`, `pool.min`, `pool.acquire_timeout`,
    /// `pool.idle_timeout`, `pool.max_lifetime`, `pool.test_before_acquire`.
    /// Unrecognized parameters are left for the driver.
    pub fn from_dsn(dsn: &str) -> Result<Self> {
        let url = Url::parse(dsn)?;
        let mut cfg = ExecutorConfig {
            database_url: Some(dsn.to_string()),
            ..ExecutorConfig::default()
        };

        for (k, v) in url.query_pairs() {
            let key = k.as_ref();
            let val = v.as_ref();
            match key {
                "pool.max" => cfg.max_connections = Some(parse_u32(val, "pool.max")?),
                "pool.min" => cfg.min_connections = Some(parse_u32(val, "pool.min")?),
                "pool.acquire_timeout" => cfg.acquire_timeout = Some(parse_duration(val, key)?),
                "pool.idle_timeout" => cfg.idle_timeout = Some(parse_duration(val, key)?),
                "pool.max_lifetime" => cfg.max_lifetime = Some(parse_duration(val, key)?),
                "pool.test_before_acquire" => {
                    cfg.test_before_acquire = Some(parse_bool(val, key)?);
                }
                _ => {}
            }
        }
        Ok(cfg)
    }

    /// Merges `other` underneath `self`: fields already set on `self` win.
    pub fn merge_override(self, other: ExecutorConfig) -> Self {
        Self {
            database_url: self.database_url.or(other.database_url),
            pool: self.pool.or(other.pool),
            max_connections: self.max_connections.or(other.max_connections),
            min_connections: self.min_connections.or(other.min_connections),
            acquire_timeout: self.acquire_timeout.or(other.acquire_timeout),
            idle_timeout: self.idle_timeout.or(other.idle_timeout),
            max_lifetime: self.max_lifetime.or(other.max_lifetime),
            test_before_acquire: self.test_before_acquire.or(other.test_before_acquire),
        }
    }
}

pub struct ExecutorConfigBuilder {
    cfg: ExecutorConfig,
}

impl ExecutorConfigBuilder {
    pub fn database_url<S: Into<String>>(mut self, url: S) -> Self {
        self.cfg.database_url = Some(url.into());
        self
    }

    pub fn pool(mut self, pool: DbPool) -> Self {
        self.cfg.pool = Some(pool);
        self
    }

    pub fn max_connections(mut self, n: u32) -> Self {
        self.cfg.max_connections = Some(n);
        self
    }

    pub fn min_connections(mut self, n: u32) -> Self {
        self.cfg.min_connections = Some(n);
        self
    }

    pub fn acquire_timeout(mut self, d: Duration) -> Self {
        self.cfg.acquire_timeout = Some(d);
        self
    }

    pub fn idle_timeout(mut self, d: Duration) -> Self {
        self.cfg.idle_timeout = Some(d);
        self
    }

    pub fn max_lifetime(mut self, d: Duration) -> Self {
        self.cfg.max_lifetime = Some(d);
        self
    }

    pub fn test_before_acquire(mut self, yes: bool) -> Self {
        self.cfg.test_before_acquire = Some(yes);
        self
    }

    pub fn build(self) -> ExecutorConfig {
        self.cfg
    }
}

fn parse_u32(v: &str, key: &'static str) -> Result<u32> {
    v.parse::<u32>().map_err(|_| Error::InvalidInt {
        key: Cow::Borrowed(key),
        value: v.to_string(),
    })
}

fn parse_bool(v: &str, key: &str) -> Result<bool> {
    match v {
        "1" | "true" | "TRUE" => Ok(true),
        "0" | "false" | "FALSE" => Ok(false),
        _ => Err(Error::InvalidBool {
            key: Cow::Owned(key.to_string()),
            value: v.to_string(),
        }),
    }
}

fn parse_duration(v: &str, key: &str) -> Result<Duration> {
    humantime::parse_duration(v).map_err(|_| Error::InvalidDuration {
        key: Cow::Owned(key.to_string()),
        value: v.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dsn_pool_knobs_are_recognized() {
        let cfg = ExecutorConfig::from_dsn(
            "postgres://u:p@localhost/app?pool.max=20&pool.min=2&pool.idle_timeout=45s",
        )
        .expect("parse");
        assert_eq!(cfg.max_connections, Some(20));
        assert_eq!(cfg.min_connections, Some(2));
        assert_eq!(cfg.idle_timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn unknown_query_parameters_are_ignored() {
        let cfg = ExecutorConfig::from_dsn("postgres://localhost/app?sslmode=disable")
            .expect("parse");
        assert_eq!(cfg.max_connections, None);
    }

    #[test]
    fn builder_fields_override_dsn_on_merge() {
        let from_dsn = ExecutorConfig::from_dsn("postgres://localhost/app?pool.max=5")
            .expect("parse");
        let cfg = ExecutorConfig::builder()
            .max_connections(50)
            .build()
            .merge_override(from_dsn);
        assert_eq!(cfg.max_connections, Some(50));
        assert_eq!(
            cfg.database_url.as_deref(),
            Some("postgres://localhost/app?pool.max=5")
        );
    }

    #[test]
    fn bad_duration_is_an_error() {
        let err = ExecutorConfig::from_dsn("postgres://localhost/app?pool.idle_timeout=soon")
            .expect_err("must fail");
        assert!(matches!(err, Error::InvalidDuration { .. }));
    }

    #[test]
    fn bad_dsn_is_an_error() {
        assert!(matches!(
            ExecutorConfig::from_dsn("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
