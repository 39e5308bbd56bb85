//! Memo resolution utilities.

use anyhow::Result;

use crate::domain::Memo;
use crate::session::Session;
use crate::store::MemoStore;

/// Result of resolving a memo identifier.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one memo matched.
    Unique(Memo),
    /// Multiple memos matched (ambiguous).
    Ambiguous(Vec<Memo>),
    /// No memos matched.
    NotFound,
}

/// Prints detailed information about ambiguous memos to help distinguish them.
pub(crate) fn print_ambiguous_memos(identifier: &str, memos: &[Memo]) {
    eprintln!("Ambiguous: '{}' matches {} memos:", identifier, memos.len());
    for memo in memos {
        eprintln!("  {} - {}", memo.id().prefix(), memo.title());
        if !memo.tags().is_empty() {
            let tags: Vec<_> = memo.tags().iter().map(|t| t.text()).collect();
            eprintln!("      tags: {}", tags.join(" "));
        }
    }
    eprintln!();
    eprintln!("Use the ID prefix to specify which memo you mean.");
}

/// Resolves a memo identifier to a unique memo.
///
/// Resolution order:
/// 1. ID prefix match (if input looks like a ULID prefix)
/// 2. Exact title match
///
/// Returns `Unique` if exactly one memo matches across both methods,
/// `Ambiguous` if multiple memos match, or `NotFound` if no match.
pub fn resolve_memo(
    store: &dyn MemoStore,
    session: &Session,
    identifier: &str,
) -> Result<ResolveResult> {
    let identifier = identifier.trim();
    let memos = store.fetch_all(session.user())?;

    let looks_like_id =
        identifier.len() >= 4 && identifier.chars().all(|c| c.is_ascii_alphanumeric());

    let mut candidates: Vec<Memo> = Vec::new();

    if looks_like_id {
        let prefix = identifier.to_uppercase();
        candidates.extend(
            memos
                .iter()
                .filter(|m| m.id().to_string().starts_with(&prefix))
                .cloned(),
        );
    }

    if candidates.is_empty() {
        candidates.extend(memos.iter().filter(|m| m.title() == identifier).cloned());
    }

    match candidates.len() {
        0 => Ok(ResolveResult::NotFound),
        1 => Ok(ResolveResult::Unique(candidates.remove(0))),
        _ => Ok(ResolveResult::Ambiguous(candidates)),
    }
}
