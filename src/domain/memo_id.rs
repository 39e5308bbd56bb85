//! ULID-based memo identifier with prefix extraction and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::SystemTime;
use ulid::Ulid;

/// A unique identifier for memos based on ULID.
///
/// A memo has no id until its first save; the store assigns one when it
/// receives a [`MemoInput`](crate::domain::MemoInput) without an id.
///
/// ULIDs are 26-character Crockford Base32 encoded strings that are:
/// - Lexicographically sortable (chronological order)
/// - Globally unique
/// - URL-safe
///
/// # Examples
///
/// ```
/// use memox::domain::MemoId;
///
/// let id = MemoId::new();
/// println!("Full ID: {}", id);         // e.g., "01HQ3K5M7NXJK4QZPW8V2R6T9Y"
/// println!("Prefix: {}", id.prefix()); // e.g., "01HQ3K5M7N"
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MemoId(Ulid);

impl MemoId {
    /// Creates a new MemoId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates a MemoId from a specific datetime (useful for testing).
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let system_time: SystemTime = datetime.into();
        Self(Ulid::from_datetime(system_time))
    }

    /// Returns the 10-character prefix of the ULID.
    ///
    /// The prefix encodes the full 48-bit millisecond timestamp and is what
    /// listing output shows as the short id.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..10].to_string()
    }
}

impl Default for MemoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for MemoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseMemoIdError {
    value: String,
    reason: String,
}

impl ParseMemoIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseMemoIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid memo id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseMemoIdError {}

impl FromStr for MemoId {
    type Err = ParseMemoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(MemoId)
            .map_err(|e| ParseMemoIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for MemoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for MemoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
