//! Tag-suggestion collaborator: markup stripping, completion trait, and the
//! candidate filtering/merging pipeline.

mod openai;
mod stub;

pub use openai::OpenAiSuggester;
pub use stub::StubSuggester;

use crate::domain::{Tag, dedup_by_text};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// The fixed instruction sent ahead of the memo text.
pub const SUGGESTION_PROMPT: &str = "Generate relevant hashtags for the given text. \
Consider its main topics and keywords, suggest highly relevant tags in the language \
of the text, and return them separated by spaces.";

/// Errors from the tag-suggestion service.
///
/// None of these are fatal to the editing flow; the workflow degrades to an
/// empty suggestion set and reports the failure.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The HTTP request itself failed.
    #[error("suggestion request failed: {0}")]
    Http(String),

    /// The service answered with an error payload.
    #[error("suggestion service error: {0}")]
    Api(String),

    /// The response could not be decoded.
    #[error("malformed suggestion response: {0}")]
    Malformed(String),
}

/// Result type for suggestion operations.
pub type SuggestResult<T> = Result<T, SuggestError>;

/// A completion service that turns plain memo text into suggestion output.
///
/// The output is free-form text; [`parse_candidates`] extracts the usable
/// hashtag tokens from it.
pub trait TagSuggester {
    fn complete(&self, text: &str) -> SuggestResult<String>;
}

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("markup pattern is valid"));

/// Strips rich-text markup, leaving plain text.
///
/// Mirrors the editor's storage format: anything between `<` and `>` is
/// dropped, including a trailing unterminated `<...` fragment.
pub fn strip_markup(content: &str) -> String {
    MARKUP.replace_all(content, "").into_owned()
}

/// Splits raw completion output into tag candidates.
///
/// Tokens are whitespace-separated; a candidate survives only if its text
/// contains exactly one `#`, which rejects both un-hashed words and
/// multi-hashed artifacts.
pub fn parse_candidates(raw: &str) -> Vec<Tag> {
    raw.split_whitespace()
        .filter(|token| token.matches('#').count() == 1)
        .map(Tag::from_token)
        .collect()
}

/// Appends candidates to an existing tag list and de-duplicates by text,
/// keeping the first occurrence.
pub fn merge_candidates(existing: Vec<Tag>, candidates: Vec<Tag>) -> Vec<Tag> {
    let mut merged = existing;
    merged.extend(candidates);
    dedup_by_text(merged)
}

/// Runs the full suggestion pipeline for a memo's content.
///
/// Empty plain text (after markup stripping) short-circuits to an empty
/// set without calling the service.
pub fn suggest_tags(suggester: &dyn TagSuggester, content: &str) -> SuggestResult<Vec<Tag>> {
    let text = strip_markup(content);
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let raw = suggester.complete(&text)?;
    Ok(parse_candidates(&raw))
}
