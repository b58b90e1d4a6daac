//! Immutable clause records, one per statement kind.
//!
//! A record is dialect-agnostic structured storage: setters are pure and
//! return a new record (the receiver is untouched), append setters preserve
//! call order, clear setters reset a field to absent. Nothing here renders or
//! validates SQL.

mod delete;
mod insert;
mod truncate;
mod update;

pub use delete::DeleteClauses;
pub use insert::{InsertClauses, RowSource};
pub use truncate::{TruncateClauses, TruncateOptions};
pub use update::UpdateClauses;

/// Row limit on UPDATE/DELETE: a count or the `LIMIT ALL` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(u64),
    All,
}
