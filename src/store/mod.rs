//! MemoStore trait and result types.

use crate::domain::{Memo, MemoId, MemoInput};
use crate::session::UserId;
use std::path::PathBuf;
use thiserror::Error;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Errors that can occur during store operations.
///
/// A missing memo is not an error at this layer; `fetch_by_id` returns
/// `Ok(None)` and `delete` is idempotent.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be decoded back into domain types.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence collaborator for memo records.
///
/// Every operation is scoped to a user; the store is the sole writer of
/// durable memo records. Single-record writes are atomic, but nothing
/// coordinates across operations: the count-then-save sequence used for
/// order assignment is an accepted race.
pub trait MemoStore {
    /// Fetches a single memo by id, `Ok(None)` if it does not exist.
    fn fetch_by_id(&self, user: &UserId, id: &MemoId) -> StoreResult<Option<Memo>>;

    /// Fetches all memos for the user, in creation-order (`order` column).
    fn fetch_all(&self, user: &UserId) -> StoreResult<Vec<Memo>>;

    /// Saves a memo, assigning an id when the input has none.
    ///
    /// Returns the id the record was stored under.
    fn save(&mut self, user: &UserId, input: &MemoInput) -> StoreResult<MemoId>;

    /// Deletes a memo by id (idempotent).
    fn delete(&mut self, user: &UserId, id: &MemoId) -> StoreResult<()>;

    /// Counts the user's memos, used for order assignment at creation.
    fn count(&self, user: &UserId) -> StoreResult<usize>;
}
