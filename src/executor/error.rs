use std::borrow::Cow;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no database_url or pool was provided")]
    MissingConnection,

    /// The statement failed to render; carried over from the builder's sticky
    /// error channel.
    #[error(transparent)]
    Build(#[from] crate::error::Error),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid DSN URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid integer for {key}: {value}")]
    InvalidInt {
        key: Cow<'static, str>,
        value: String,
    },

    #[error("invalid bool for {key}: {value} (use true/false/1/0)")]
    InvalidBool {
        key: Cow<'static, str>,
        value: String,
    },

    #[error("invalid duration for {key}: {value} (e.g. 250ms, 5s, 2m, 1h)")]
    InvalidDuration {
        key: Cow<'static, str>,
        value: String,
    },

    #[error("invalid database scheme: {0}")]
    UnsupportedScheme(String),
}
