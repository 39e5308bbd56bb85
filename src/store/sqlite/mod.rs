//! SQLite-backed memo store implementation.

mod connection;
mod repo_impl;
mod schema;
mod transaction;

#[cfg(test)]
mod tests;

use rusqlite::Connection;

pub use schema::create_schema;
pub use transaction::Transaction;

/// SQLite-backed memo store.
///
/// Manages the database connection and implements
/// [`MemoStore`](crate::store::MemoStore) over it.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
