//! Canned tag suggester for tests and offline runs.

use super::{SuggestError, SuggestResult, TagSuggester};

enum Behavior {
    Reply(String),
    Echo,
    Fail(String),
}

/// A suggester with fixed behavior, standing in for the hosted service.
pub struct StubSuggester {
    behavior: Behavior,
}

impl StubSuggester {
    /// Always answers with the given text.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Reply(reply.into()),
        }
    }

    /// Answers with the input text unchanged.
    pub fn echoing() -> Self {
        Self {
            behavior: Behavior::Echo,
        }
    }

    /// Always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
        }
    }
}

impl TagSuggester for StubSuggester {
    fn complete(&self, text: &str) -> SuggestResult<String> {
        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Echo => Ok(text.to_string()),
            Behavior::Fail(message) => Err(SuggestError::Api(message.clone())),
        }
    }
}
