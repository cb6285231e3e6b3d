//! In-memory notes cache kept consistent with the notes service.
//!
//! The store is the single owner of the note collection. Consumers read
//! snapshots or subscribe to changes; only the store's operations write.
//! A full `load` replaces the cache with the server's answer, while
//! `create`, `update` and `delete` patch exactly the record they touched
//! once the service confirms. Nothing is applied optimistically.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::api::{HttpNotesClient, NotesApi};
use crate::auth::SessionPersistence;
use crate::models::{Note, NoteDraft, NoteId, NotePatch};
use crate::Result;

/// Observable store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesState {
    notes: Vec<Note>,
    is_loading: bool,
    error: Option<String>,
}

impl NotesState {
    /// Notes in last-fetched server order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// True only while a `load` is outstanding.
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the most recent failed `load`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// What a list screen should render.
    pub fn view(&self) -> NotesView<'_> {
        if self.is_loading {
            NotesView::Loading
        } else if let Some(message) = self.error.as_deref() {
            NotesView::Failed(message)
        } else if self.notes.is_empty() {
            NotesView::Empty
        } else {
            NotesView::Ready(&self.notes)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a [Note]),
}

pub struct NotesStore<A: NotesApi> {
    api: A,
    state: watch::Sender<NotesState>,
    generation: AtomicU64,
}

impl<A: NotesApi> NotesStore<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(NotesState::default());
        Self {
            api,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> NotesState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<NotesState> {
        self.state.subscribe()
    }

    pub fn find(&self, id: NoteId) -> Option<Note> {
        self.state.borrow().find(id).cloned()
    }

    /// Fetch the full collection and replace the cache with it.
    ///
    /// Failures are recorded in [`NotesState::error`] and leave `notes`
    /// untouched.
    pub async fn load(&self) {
        let generation = self.current_generation();
        tracing::debug!("Loading notes");
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let result = self.api.list_notes().await;
        if self.is_stale(generation) {
            tracing::debug!("Discarding notes list from a previous session");
            return;
        }

        self.state.send_modify(|state| {
            state.is_loading = false;
            match result {
                Ok(notes) => {
                    tracing::debug!("Loaded {} notes", notes.len());
                    state.notes = notes;
                }
                Err(error) => {
                    tracing::warn!("Failed to load notes: {}", error);
                    state.error = Some(error.to_string());
                }
            }
        });
    }

    /// Create a note and append the server-confirmed record.
    pub async fn create(&self, draft: NoteDraft) -> Result<Note> {
        draft.validate()?;
        let generation = self.current_generation();

        let note = self.api.create_note(&draft).await.inspect_err(|error| {
            tracing::warn!("Failed to create note: {}", error);
        })?;

        if self.is_stale(generation) {
            tracing::debug!("Discarding created note {} from a previous session", note.id);
            return Ok(note);
        }
        self.state.send_modify(|state| {
            // A load that finished first may already hold the record.
            if let Some(existing) = state.notes.iter_mut().find(|entry| entry.id == note.id) {
                existing.clone_from(&note);
            } else {
                state.notes.push(note.clone());
            }
        });
        Ok(note)
    }

    /// Replace a note's mutable fields once the service accepts the patch.
    pub async fn update(&self, id: NoteId, patch: NotePatch) -> Result<Note> {
        patch.validate()?;
        let generation = self.current_generation();

        let note = self
            .api
            .update_note(id, &patch)
            .await
            .inspect_err(|error| {
                tracing::warn!("Failed to update note {}: {}", id, error);
            })?;

        if self.is_stale(generation) {
            tracing::debug!("Discarding update of note {} from a previous session", id);
            return Ok(note);
        }
        self.state.send_if_modified(|state| {
            let Some(entry) = state.notes.iter_mut().find(|entry| entry.id == id) else {
                return false;
            };
            entry.apply(&patch);
            true
        });
        Ok(note)
    }

    /// Delete a note and drop it from the cache once the service confirms.
    pub async fn delete(&self, id: NoteId) -> Result<()> {
        let generation = self.current_generation();

        self.api.delete_note(id).await.inspect_err(|error| {
            tracing::warn!("Failed to delete note {}: {}", id, error);
        })?;

        if self.is_stale(generation) {
            tracing::debug!("Discarding delete of note {} from a previous session", id);
            return Ok(());
        }
        self.state.send_if_modified(|state| {
            let before = state.notes.len();
            state.notes.retain(|entry| entry.id != id);
            state.notes.len() != before
        });
        Ok(())
    }

    /// Clear all state. Responses to requests issued before the reset are
    /// discarded when they arrive.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(NotesState::default());
        tracing::debug!("Notes store reset");
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.current_generation() != generation
    }
}

impl<S: SessionPersistence> NotesStore<HttpNotesClient<S>> {
    /// Sign out: forget the cached notes, then drop the stored session.
    ///
    /// Requests still in flight from the signed-out session are discarded
    /// when they complete.
    pub fn logout(&self) -> Result<()> {
        self.reset();
        self.api.logout()
    }
}
