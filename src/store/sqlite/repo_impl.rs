//! MemoStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Memo, MemoId, MemoInput, Tag};
use crate::session::UserId;
use crate::store::{MemoStore, StoreError, StoreResult};
use chrono::{DateTime, Utc};

fn parse_timestamp(s: &str, field: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("invalid {} timestamp: {}", field, e)))
}

impl SqliteStore {
    /// Loads the tag rows for one memo, ordered by position.
    fn tags_for(&self, user: &UserId, id: &str) -> StoreResult<Vec<Tag>> {
        let mut stmt = self.conn.prepare(
            "SELECT tag_id, text FROM memo_tags
             WHERE user_id = ?1 AND memo_id = ?2
             ORDER BY position",
        )?;
        let tags = stmt
            .query_map([user.as_str(), id], |row| {
                Ok(Tag::with_id(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }
}

impl MemoStore for SqliteStore {
    fn fetch_by_id(&self, user: &UserId, id: &MemoId) -> StoreResult<Option<Memo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, created_at, updated_at, ord
             FROM memos WHERE user_id = ?1 AND id = ?2",
        )?;

        let row = stmt.query_row([user.as_str(), &id.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, i64>(5)?,
            ))
        });

        let (id_str, title, content, created_str, updated_str, ord) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        let memo_id: MemoId = id_str
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("invalid memo id in database: {}", e)))?;
        let created_at = parse_timestamp(&created_str, "created_at")?;
        let updated_at = parse_timestamp(&updated_str, "updated_at")?;
        let tags = self.tags_for(user, &id_str)?;

        let memo = Memo::new(memo_id, title, content, tags, created_at, updated_at, ord)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(memo))
    }

    fn fetch_all(&self, user: &UserId) -> StoreResult<Vec<Memo>> {
        // Creation-order is the collaborator's default ordering; the list
        // view snapshots it as its "update" sort.
        let mut stmt = self.conn.prepare(
            "SELECT id FROM memos WHERE user_id = ? ORDER BY ord, created_at",
        )?;
        let ids: Vec<MemoId> = stmt
            .query_map([user.as_str()], |row| row.get::<_, String>(0))?
            .filter_map(|r| r.ok())
            .filter_map(|id_str| id_str.parse().ok())
            .collect();

        let mut memos = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(memo) = self.fetch_by_id(user, &id)? {
                memos.push(memo);
            }
        }
        Ok(memos)
    }

    fn save(&mut self, user: &UserId, input: &MemoInput) -> StoreResult<MemoId> {
        let id = input.id().cloned().unwrap_or_default();
        let id_str = id.to_string();

        let tx = self.transaction()?;

        // created_at is written once; conflicts keep the stored value.
        tx.execute(
            "INSERT INTO memos (user_id, id, title, content, created_at, updated_at, ord)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(user_id, id) DO UPDATE SET
                 title = excluded.title,
                 content = excluded.content,
                 updated_at = excluded.updated_at,
                 ord = excluded.ord",
            rusqlite::params![
                user.as_str(),
                id_str,
                input.title(),
                input.content(),
                input.created_at().to_rfc3339(),
                input.updated_at().to_rfc3339(),
                input.order(),
            ],
        )?;

        tx.execute(
            "DELETE FROM memo_tags WHERE user_id = ?1 AND memo_id = ?2",
            [user.as_str(), &id_str],
        )?;
        for (position, tag) in input.tags().iter().enumerate() {
            tx.execute(
                "INSERT INTO memo_tags (user_id, memo_id, tag_id, text, position)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![user.as_str(), id_str, tag.id(), tag.text(), position as i64],
            )?;
        }

        tx.commit()?;
        Ok(id)
    }

    fn delete(&mut self, user: &UserId, id: &MemoId) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM memos WHERE user_id = ?1 AND id = ?2",
            [user.as_str(), &id.to_string()],
        )?;
        Ok(())
    }

    fn count(&self, user: &UserId) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM memos WHERE user_id = ?",
            [user.as_str()],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
