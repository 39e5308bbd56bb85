//! Logged-in session passed explicitly into controller operations.

use std::fmt;

/// Identifier of the user owning a memo collection.
///
/// The store keys every memo under a user id, mirroring per-user
/// collections in a hosted backend. The CLI resolves it from the `--user`
/// flag or config and defaults to `"default"`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId(\"{}\")", self.0)
    }
}

/// The logged-in user context, valid from login to logout.
///
/// Controllers take a `&Session` per operation instead of reading
/// process-wide state. The API key is optional; without one the tag
/// suggestion feature degrades to a no-op.
#[derive(Debug, Clone)]
pub struct Session {
    user: UserId,
    api_key: Option<String>,
}

impl Session {
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            api_key: None,
        }
    }

    /// Attaches an AI suggestion credential to the session.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
