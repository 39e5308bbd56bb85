//! Hashtag-style tag attached to a memo, plus pure tag-list transforms.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// A hashtag-style label attached to a memo.
///
/// A tag pairs a locally generated id with its display text. The id is
/// unique within one memo's tag list at assignment time, not globally.
/// Text produced by the manual-add or suggestion path always carries a
/// single leading `#`.
///
/// Tags are de-duplicated by text, case-sensitively, keeping the first
/// occurrence; `#Rust` and `#rust` are distinct tags.
///
/// # Examples
///
/// ```
/// use memox::domain::Tag;
///
/// let tag = Tag::manual("travel");
/// assert_eq!(tag.text(), "#travel");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: String,
    text: String,
}

impl Tag {
    /// Creates a tag from user input, prefixing the text with `#`.
    pub fn manual(input: &str) -> Self {
        Self {
            id: Ulid::new().to_string(),
            text: format!("#{}", input),
        }
    }

    /// Creates a tag from a suggestion token, keeping the text as-is.
    ///
    /// Callers are expected to have filtered the token through
    /// [`crate::suggest::parse_candidates`] first, so the text already
    /// contains its `#`.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            text: token.into(),
        }
    }

    /// Reconstructs a tag with a known id, e.g. when loading from the store.
    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Returns the locally generated tag id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the tag text, including its `#` prefix.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.text)
    }
}

/// Removes duplicate tags by text, keeping the first occurrence.
///
/// Comparison is case-sensitive.
pub fn dedup_by_text(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen: Vec<Tag> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.iter().any(|t| t.text == tag.text) {
            seen.push(tag);
        }
    }
    seen
}

/// Removes the tag at `index`. Out-of-range indices are a no-op.
pub fn remove_at(tags: &mut Vec<Tag>, index: usize) {
    if index < tags.len() {
        tags.remove(index);
    }
}

/// Moves the tag at `from` to position `to` (drag reorder).
///
/// The tag is removed first, then inserted, so `to` addresses the shortened
/// list. A `to` past the end appends; an out-of-range `from` is a no-op.
pub fn drag(tags: &mut Vec<Tag>, from: usize, to: usize) {
    if from >= tags.len() {
        return;
    }
    let tag = tags.remove(from);
    let to = to.min(tags.len());
    tags.insert(to, tag);
}
