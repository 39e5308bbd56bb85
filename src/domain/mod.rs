//! Core types: Memo, MemoInput, MemoId (ULID), Tag

mod memo;
mod memo_id;
mod tag;

pub use memo::{Memo, MemoInput, ParseMemoError};
pub use memo_id::{MemoId, ParseMemoIdError};
pub use tag::{Tag, dedup_by_text, drag, remove_at};
