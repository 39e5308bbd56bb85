//! List view model: loading, sorting, keyword search, and deletion over a
//! user's memo collection.

use crate::domain::{Memo, MemoId};
use crate::session::Session;
use crate::store::{MemoStore, StoreError};

/// Available sort orders.
///
/// `Update` restores the load-time ordering (the store's own order, which
/// tracks recency of activity); `Title` is case-insensitive lexicographic;
/// `Date` is creation time, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Update,
    Title,
    Date,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Update => "update",
            SortKey::Title => "title",
            SortKey::Date => "date",
        }
    }
}

/// What the view should say about the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDisplay {
    /// No search active; show the full list.
    Inactive,
    /// A search matched this many memos.
    Found(usize),
    /// A search matched nothing.
    NoResults,
}

/// In-memory view over a user's memos.
///
/// Holds the working list (what the view renders) alongside two
/// snapshots taken at load time: the unfiltered collection, which search
/// filters against and restores from, and the original ordering, which the
/// `Update` sort returns to.
#[derive(Debug)]
pub struct MemoListView {
    memos: Vec<Memo>,
    unfiltered: Vec<Memo>,
    load_order: Vec<Memo>,
    sort_key: SortKey,
    reversed: bool,
    display: SearchDisplay,
}

impl MemoListView {
    /// Fetches the user's memos and builds the view state.
    pub fn load(store: &dyn MemoStore, session: &Session) -> Result<Self, StoreError> {
        let memos = store.fetch_all(session.user())?;
        Ok(Self {
            unfiltered: memos.clone(),
            load_order: memos.clone(),
            memos,
            sort_key: SortKey::default(),
            reversed: false,
            display: SearchDisplay::Inactive,
        })
    }

    /// The fallback view when loading fails: an empty list the user can
    /// still navigate away from.
    pub fn empty() -> Self {
        Self {
            memos: Vec::new(),
            unfiltered: Vec::new(),
            load_order: Vec::new(),
            sort_key: SortKey::default(),
            reversed: false,
            display: SearchDisplay::Inactive,
        }
    }

    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn display(&self) -> SearchDisplay {
        self.display
    }

    /// Re-sorts the working list by the given key, keeping the current
    /// reversal.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort_key = key;
        match key {
            SortKey::Update => {
                self.memos = self.load_order.clone();
            }
            SortKey::Title => {
                self.memos.sort_by(|a, b| {
                    a.title()
                        .to_lowercase()
                        .cmp(&b.title().to_lowercase())
                        .then_with(|| a.title().cmp(b.title()))
                });
            }
            SortKey::Date => {
                self.memos.sort_by_key(|m| m.created_at());
            }
        }
        if self.reversed {
            self.memos.reverse();
        }
    }

    /// Flips between ascending and descending for the current ordering.
    pub fn toggle_reverse(&mut self) {
        self.reversed = !self.reversed;
        self.memos.reverse();
    }

    /// Filters the working list by a case-insensitive keyword over title,
    /// content, and tag text. A blank (empty or whitespace-only) keyword
    /// clears the search and restores the full list.
    pub fn search(&mut self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.memos = self.unfiltered.clone();
            self.display = SearchDisplay::Inactive;
            return;
        }

        let needle = keyword.to_lowercase();
        self.memos = self
            .unfiltered
            .iter()
            .filter(|memo| {
                memo.title().to_lowercase().contains(&needle)
                    || memo.content().to_lowercase().contains(&needle)
                    || memo
                        .tags()
                        .iter()
                        .any(|tag| tag.text().to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        self.display = if self.memos.is_empty() {
            SearchDisplay::NoResults
        } else {
            SearchDisplay::Found(self.memos.len())
        };
    }

    /// Deletes a memo through the store and, on success, removes it from
    /// every held list so it cannot resurface through search or re-sort.
    ///
    /// On store failure the view state is unchanged.
    pub fn delete(
        &mut self,
        store: &mut dyn MemoStore,
        session: &Session,
        id: &MemoId,
    ) -> Result<(), StoreError> {
        store.delete(session.user(), id)?;
        self.memos.retain(|m| m.id() != id);
        self.unfiltered.retain(|m| m.id() != id);
        self.load_order.retain(|m| m.id() != id);
        Ok(())
    }
}
