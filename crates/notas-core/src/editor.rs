//! Note editing form and the rich-content capability it drives.
//!
//! The form owns the editor handle and talks to it only through
//! [`RichContent`], so any widget (or an external program) can stand in.

use crate::models::{Note, NoteDraft, NoteId, NotePatch};
use crate::Result;

/// Capability exposed by a rich-text editor widget.
pub trait RichContent {
    fn set_content(&mut self, html: &str);
    fn content(&self) -> String;
}

/// Plain in-memory content holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer(String);

impl TextBuffer {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl RichContent for TextBuffer {
    fn set_content(&mut self, html: &str) {
        html.clone_into(&mut self.0);
    }

    fn content(&self) -> String {
        self.0.clone()
    }
}

/// What saving the form asks of the notes store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRequest {
    Create(NoteDraft),
    Update(NoteId, NotePatch),
}

pub struct NoteEditor<C: RichContent> {
    pub title: String,
    pub completed: bool,
    editing: Option<NoteId>,
    content: C,
}

impl<C: RichContent> NoteEditor<C> {
    /// Empty form for a new note.
    pub fn new_note(content: C) -> Self {
        Self {
            title: String::new(),
            completed: false,
            editing: None,
            content,
        }
    }

    /// Form seeded from an existing note; the body is pushed into the handle.
    pub fn edit(mut content: C, note: &Note) -> Self {
        content.set_content(&note.body);
        Self {
            title: note.title.clone(),
            completed: note.completed,
            editing: Some(note.id),
            content,
        }
    }

    pub const fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    pub const fn content_handle(&self) -> &C {
        &self.content
    }

    pub fn content_handle_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Build the validated store request. New notes get a trimmed title;
    /// edits keep the title as typed.
    pub fn to_request(&self) -> Result<EditorRequest> {
        let body = self.content.content();
        match self.editing {
            Some(id) => {
                let patch = NotePatch::new(self.title.clone(), body, self.completed);
                patch.validate()?;
                Ok(EditorRequest::Update(id, patch))
            }
            None => {
                let draft = NoteDraft::new(self.title.trim(), body, self.completed);
                draft.validate()?;
                Ok(EditorRequest::Create(draft))
            }
        }
    }
}
