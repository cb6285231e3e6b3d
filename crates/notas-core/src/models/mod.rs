//! Data models for Notas

mod note;

pub use note::{strip_markup, Note, NoteDraft, NoteId, NotePatch, PREVIEW_MAX_CHARS};
