//! Editor workflow for a single memo: draft state, phase machine, and the
//! validate-and-save operation.

use crate::domain::{self, MemoId, MemoInput, ParseMemoError, Tag};
use crate::session::Session;
use crate::store::{MemoStore, StoreError};
use crate::suggest::{self, SuggestError, SuggestResult, TagSuggester};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Where the editor is in its lifecycle.
///
/// `Loading → Ready` after the initial fetch (immediate for create mode),
/// `Ready ⇄ GeneratingTags` around a suggestion call, `Ready → Saved` on a
/// successful save. Validation and save failures keep the editor in
/// `Ready` with the draft intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Loading,
    Ready,
    GeneratingTags,
    Saved,
}

/// Errors surfaced by editor operations.
///
/// `TitleRequired` is the inline validation failure (no notification);
/// everything else maps to the generic error notification in the view
/// layer.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The draft title is empty; the title-error flag has been set.
    #[error("title is required")]
    TitleRequired,

    /// The memo to edit does not exist.
    #[error("memo not found: {id}")]
    NotFound { id: String },

    /// The draft could not be turned into a save payload.
    #[error(transparent)]
    Draft(#[from] ParseMemoError),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handle for one in-flight suggestion call.
///
/// Applying results requires the ticket taken when the call began; a
/// ticket from a superseded or abandoned call is stale and its results are
/// dropped. This is the guard against late-arriving responses mutating a
/// view that has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

/// Draft state and workflow for creating or editing one memo.
///
/// The editor exclusively owns the draft during an edit session; nothing
/// is persisted until [`save`](Self::save) succeeds, and discarding the
/// editor discards the draft.
#[derive(Debug)]
pub struct EditorSession {
    memo_id: Option<MemoId>,
    title: String,
    content: String,
    tags: Vec<Tag>,
    created_at: Option<DateTime<Utc>>,
    order: Option<i64>,
    title_error: bool,
    phase: EditorPhase,
    epoch: u64,
}

impl EditorSession {
    /// Starts an empty draft in create mode.
    pub fn create() -> Self {
        Self {
            memo_id: None,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            created_at: None,
            order: None,
            title_error: false,
            phase: EditorPhase::Ready,
            epoch: 0,
        }
    }

    /// Fetches an existing memo and populates the draft from it.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NotFound` if the memo does not exist and
    /// `EditorError::Store` if the fetch fails; the view layer maps both
    /// to the generic error notification.
    pub fn open(
        store: &dyn MemoStore,
        session: &Session,
        id: &MemoId,
    ) -> Result<Self, EditorError> {
        let mut editor = Self::create();
        editor.phase = EditorPhase::Loading;

        let memo = store
            .fetch_by_id(session.user(), id)?
            .ok_or_else(|| EditorError::NotFound { id: id.to_string() })?;

        editor.memo_id = Some(memo.id().clone());
        editor.title = memo.title().to_string();
        editor.content = memo.content().to_string();
        editor.tags = memo.tags().to_vec();
        editor.created_at = Some(memo.created_at());
        editor.order = Some(memo.order());
        editor.phase = EditorPhase::Ready;
        Ok(editor)
    }

    // ===========================================
    // Draft accessors
    // ===========================================

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Returns the id once the memo exists in the store.
    pub fn memo_id(&self) -> Option<&MemoId> {
        self.memo_id.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// True after a save attempt with an empty title, until the title is
    /// edited again.
    pub fn title_error(&self) -> bool {
        self.title_error
    }

    // ===========================================
    // Draft edits
    // ===========================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_error = false;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Appends a tag from user input, prefixing it with `#`.
    ///
    /// Duplicates are allowed here; the save path de-duplicates by text.
    pub fn add_tag(&mut self, input: &str) {
        self.tags.push(Tag::manual(input));
    }

    /// Removes the tag at `index`; out-of-range is a no-op.
    pub fn remove_tag(&mut self, index: usize) {
        domain::remove_at(&mut self.tags, index);
    }

    /// Drag-reorders the tag at `from` to position `to`.
    pub fn drag_tag(&mut self, from: usize, to: usize) {
        domain::drag(&mut self.tags, from, to);
    }

    // ===========================================
    // Tag generation
    // ===========================================

    /// Marks the start of a suggestion call and returns its ticket.
    pub fn begin_generation(&mut self) -> GenerationTicket {
        self.epoch += 1;
        self.phase = EditorPhase::GeneratingTags;
        GenerationTicket { epoch: self.epoch }
    }

    /// Applies the outcome of a suggestion call.
    ///
    /// Stale tickets are dropped without touching the draft. Candidates
    /// are merged into the tag list and de-duplicated by text, first
    /// occurrence kept. Returns how many tags were added; errors clear the
    /// in-progress state and leave the tag list untouched.
    pub fn apply_generation(
        &mut self,
        ticket: GenerationTicket,
        result: SuggestResult<Vec<Tag>>,
    ) -> Result<usize, SuggestError> {
        if ticket.epoch != self.epoch {
            return Ok(0);
        }
        self.phase = EditorPhase::Ready;
        let candidates = result?;
        let before = self.tags.len();
        self.tags = suggest::merge_candidates(std::mem::take(&mut self.tags), candidates);
        // Merging also dedups whatever was already in the list, so the
        // count can only be taken as a saturating difference.
        Ok(self.tags.len().saturating_sub(before))
    }

    /// Drops any in-flight suggestion call, e.g. on navigation away.
    ///
    /// A response that arrives afterwards carries a stale ticket and is
    /// ignored.
    pub fn abandon_generation(&mut self) {
        self.epoch += 1;
        if self.phase == EditorPhase::GeneratingTags {
            self.phase = EditorPhase::Ready;
        }
    }

    /// Runs the whole suggestion round-trip synchronously.
    ///
    /// Without a suggester (no credential configured) this is a no-op that
    /// still cycles the in-progress flag. Returns how many tags were
    /// added.
    pub fn generate_tags(
        &mut self,
        suggester: Option<&dyn TagSuggester>,
    ) -> Result<usize, SuggestError> {
        let ticket = self.begin_generation();
        let result = match suggester {
            None => Ok(Vec::new()),
            Some(s) => suggest::suggest_tags(s, &self.content),
        };
        self.apply_generation(ticket, result)
    }

    // ===========================================
    // Validate-and-save
    // ===========================================

    /// Validates the draft and persists it through the store.
    ///
    /// An empty title sets the title-error flag and aborts with zero store
    /// calls. Otherwise the creation timestamp is reused in edit mode or
    /// assigned `now` on first save, and a new memo's order value is taken
    /// from the user's current memo count. The count and the save are not
    /// atomic; concurrent creations can receive the same order value
    /// (accepted limitation).
    ///
    /// On success the editor transitions to `Saved` and returns the memo
    /// id. On store failure the draft is preserved and the editor stays
    /// `Ready`.
    pub fn save(
        &mut self,
        store: &mut dyn MemoStore,
        session: &Session,
        now: DateTime<Utc>,
    ) -> Result<MemoId, EditorError> {
        if self.title.is_empty() {
            self.title_error = true;
            return Err(EditorError::TitleRequired);
        }

        let created_at = self.created_at.unwrap_or(now);
        let order = match self.order {
            Some(order) => order,
            None => store.count(session.user())? as i64,
        };

        let input = MemoInput::new(
            self.memo_id.clone(),
            &self.title,
            &self.content,
            self.tags.clone(),
            created_at,
            now.max(created_at),
            order,
        )?;

        let id = store.save(session.user(), &input)?;
        self.memo_id = Some(id.clone());
        self.created_at = Some(created_at);
        self.order = Some(order);
        self.phase = EditorPhase::Saved;
        Ok(id)
    }
}
