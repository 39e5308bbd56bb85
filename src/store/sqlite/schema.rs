//! Schema creation for the memo database.

use crate::store::StoreResult;
use rusqlite::Connection;

/// Creates the memo tables and indexes if they do not exist.
///
/// Layout:
/// - `memos` — one row per memo, keyed by `(user_id, id)`. Timestamps are
///   stored as RFC 3339 text; `ord` is the creation-order value.
/// - `memo_tags` — one row per tag, positioned, cascading on memo delete.
pub fn create_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS memos (
             user_id    TEXT NOT NULL,
             id         TEXT NOT NULL,
             title      TEXT NOT NULL,
             content    TEXT NOT NULL,
             created_at TEXT NOT NULL,
             updated_at TEXT NOT NULL,
             ord        INTEGER NOT NULL,
             PRIMARY KEY (user_id, id)
         );

         CREATE TABLE IF NOT EXISTS memo_tags (
             user_id  TEXT NOT NULL,
             memo_id  TEXT NOT NULL,
             tag_id   TEXT NOT NULL,
             text     TEXT NOT NULL,
             position INTEGER NOT NULL,
             PRIMARY KEY (user_id, memo_id, position),
             FOREIGN KEY (user_id, memo_id)
                 REFERENCES memos (user_id, id)
                 ON DELETE CASCADE
         );

         CREATE INDEX IF NOT EXISTS idx_memos_user_ord
             ON memos (user_id, ord);",
    )?;
    Ok(())
}
