//! Memo entity and the input payload used to persist one.

use crate::domain::{MemoId, Tag, dedup_by_text};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The kind of error that occurred when constructing a memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseMemoErrorKind {
    EmptyTitle,
    UpdatedBeforeCreated,
}

/// Error returned when constructing an invalid memo or memo input.
#[derive(Debug, Clone)]
pub struct ParseMemoError {
    kind: ParseMemoErrorKind,
}

impl ParseMemoError {
    fn empty_title() -> Self {
        Self {
            kind: ParseMemoErrorKind::EmptyTitle,
        }
    }

    fn updated_before_created() -> Self {
        Self {
            kind: ParseMemoErrorKind::UpdatedBeforeCreated,
        }
    }

    /// Returns true if the error is the missing-title validation failure.
    pub fn is_empty_title(&self) -> bool {
        self.kind == ParseMemoErrorKind::EmptyTitle
    }
}

impl fmt::Display for ParseMemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseMemoErrorKind::EmptyTitle => write!(f, "invalid memo: title cannot be empty"),
            ParseMemoErrorKind::UpdatedBeforeCreated => {
                write!(f, "invalid memo: updated_at precedes created_at")
            }
        }
    }
}

impl std::error::Error for ParseMemoError {}

/// A persisted memo.
///
/// # Invariants
/// - `title` is non-empty
/// - `created_at` is set exactly once, at first save, and never changes
/// - `updated_at` is refreshed on every save and is always >= `created_at`
/// - `tags` is an ordered set: de-duplicated by text, first occurrence kept
/// - `order` is assigned at creation from the user's memo count and drives
///   the default listing order
///
/// # Examples
///
/// ```
/// use memox::domain::{Memo, MemoId, Tag};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let memo = Memo::new(MemoId::new(), "Trip plan", "<p>Pack light</p>", vec![], now, now, 0)
///     .unwrap();
/// assert_eq!(memo.title(), "Trip plan");
/// ```
#[derive(Clone, PartialEq, Serialize)]
pub struct Memo {
    id: MemoId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    order: i64,
}

impl Memo {
    /// Creates a memo, validating the title and timestamp invariants.
    ///
    /// Tags are de-duplicated by text, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ParseMemoError` if the title is empty or `updated_at`
    /// precedes `created_at`.
    pub fn new(
        id: MemoId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<Tag>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        order: i64,
    ) -> Result<Self, ParseMemoError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ParseMemoError::empty_title());
        }
        if updated_at < created_at {
            return Err(ParseMemoError::updated_before_created());
        }
        Ok(Self {
            id,
            title,
            content: content.into(),
            tags: dedup_by_text(tags),
            created_at,
            updated_at,
            order,
        })
    }

    /// Returns the memo's unique identifier.
    pub fn id(&self) -> &MemoId {
        &self.id
    }

    /// Returns the memo's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the memo's rich-text content markup.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the memo's tags, in order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns when the memo was first saved.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the memo was last saved.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the creation-order value.
    pub fn order(&self) -> i64 {
        self.order
    }
}

impl fmt::Debug for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("tags", &self.tags)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// The payload handed to the store's save operation.
///
/// Carries an id only for updates; a store assigns one on first save.
/// Construction enforces the same title and timestamp invariants as
/// [`Memo`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoInput {
    id: Option<MemoId>,
    title: String,
    content: String,
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    order: i64,
}

impl MemoInput {
    /// Creates a save payload.
    ///
    /// # Errors
    ///
    /// Returns `ParseMemoError` if the title is empty or `updated_at`
    /// precedes `created_at`.
    pub fn new(
        id: Option<MemoId>,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<Tag>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        order: i64,
    ) -> Result<Self, ParseMemoError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ParseMemoError::empty_title());
        }
        if updated_at < created_at {
            return Err(ParseMemoError::updated_before_created());
        }
        Ok(Self {
            id,
            title,
            content: content.into(),
            tags: dedup_by_text(tags),
            created_at,
            updated_at,
            order,
        })
    }

    /// Returns the target memo id, if this is an update.
    pub fn id(&self) -> Option<&MemoId> {
        self.id.as_ref()
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content markup.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the tags, in order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the creation timestamp to persist.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the update timestamp to persist.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the creation-order value to persist.
    pub fn order(&self) -> i64 {
        self.order
    }
}
