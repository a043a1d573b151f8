//! Explicit application state with reducer-style transitions.

use brief_assist::{ChatMessage, GREETING};
use brief_model::{DocumentRecord, FilterCriteria, ModelError, Priority};
use brief_store::{StorageBackend, StoreError};
use thiserror::Error;

use crate::filter::apply_filters;
use crate::library::Library;
use crate::workbench::{OPEN_PROGRESS_FLOOR, Workbench};

/// Lifecycle of a session: one forward transition, no recovery cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// A user action, mapped one-to-one from a UI gesture.
#[derive(Debug, Clone)]
pub enum Action {
    SetPriorityFilter(Option<Priority>),
    SetAudienceFilter(Option<String>),
    SetBookmarkedOnly(bool),
    SetInProgressOnly(bool),
    SetSearch(String),
    ClearFilters,
    /// Select a document for the detail view; `None` clears selection.
    SelectDocument(Option<String>),
    ToggleBookmark(String),
    SetProgress { title: String, value: i64 },
    /// Simulated external open; bumps the progress floor as a side effect.
    OpenExternally(String),
    AddAnnotation {
        title: String,
        text: String,
        author: String,
    },
    DeleteAnnotation { title: String, id: i64 },
    AppendChat(ChatMessage),
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Selection targets a title not in the loaded set.
    #[error("unknown document: {title}")]
    UnknownDocument { title: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The whole application state, independent of any rendering layer.
///
/// Transitions run through [`Session::apply`]; the filtered view is
/// derived on demand by [`Session::filtered`], never stored.
#[derive(Debug)]
pub struct Session<B: StorageBackend> {
    library: Library,
    workbench: Workbench<B>,
    criteria: FilterCriteria,
    active: Option<String>,
    transcript: Vec<ChatMessage>,
    phase: Phase,
}

impl<B: StorageBackend> Session<B> {
    /// Start a session over the given backend. User state is read once
    /// here; the transcript opens with the assistant greeting.
    pub fn new(backend: B) -> Self {
        Self {
            library: Library::new(),
            workbench: Workbench::open(backend),
            criteria: FilterCriteria::default(),
            active: None,
            transcript: vec![ChatMessage::system(GREETING)],
            phase: Phase::Loading,
        }
    }

    /// Replace the document set. A failed load keeps the previous set and
    /// the previous phase; success moves the session to `Ready`.
    pub fn load_documents(&mut self, records: Vec<DocumentRecord>) -> Result<(), ModelError> {
        self.library.load(records)?;
        self.phase = Phase::Ready;
        if let Some(active) = &self.active {
            if self.library.get(active).is_none() {
                self.active = None;
            }
        }
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::SetPriorityFilter(priority) => self.criteria.priority = priority,
            Action::SetAudienceFilter(audience) => self.criteria.audience = audience,
            Action::SetBookmarkedOnly(enabled) => self.criteria.bookmarked_only = enabled,
            Action::SetInProgressOnly(enabled) => self.criteria.in_progress_only = enabled,
            Action::SetSearch(query) => self.criteria.search = query,
            Action::ClearFilters => self.criteria = FilterCriteria::default(),
            Action::SelectDocument(title) => {
                if let Some(title) = &title {
                    if self.library.get(title).is_none() {
                        return Err(SessionError::UnknownDocument {
                            title: title.clone(),
                        });
                    }
                }
                self.active = title;
            }
            Action::ToggleBookmark(title) => {
                self.workbench.toggle_bookmark(&title)?;
            }
            Action::SetProgress { title, value } => {
                self.workbench.set_progress(&title, value)?;
            }
            Action::OpenExternally(title) => {
                self.workbench
                    .bump_progress_floor(&title, OPEN_PROGRESS_FLOOR)?;
            }
            Action::AddAnnotation {
                title,
                text,
                author,
            } => {
                self.workbench.add_annotation(&title, &text, &author)?;
            }
            Action::DeleteAnnotation { title, id } => {
                self.workbench.delete_annotation(&title, id)?;
            }
            Action::AppendChat(message) => self.transcript.push(message),
        }
        Ok(())
    }

    /// The filtered view, recomputed from current state.
    pub fn filtered(&self) -> Vec<&DocumentRecord> {
        apply_filters(
            self.library.documents(),
            &self.criteria,
            self.workbench.bookmarks(),
            self.workbench.progress_map(),
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn workbench(&self) -> &Workbench<B> {
        &self.workbench
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn active(&self) -> Option<&DocumentRecord> {
        self.active.as_deref().and_then(|title| self.library.get(title))
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}
