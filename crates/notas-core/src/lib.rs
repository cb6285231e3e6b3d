//! notas-core - Core library for Notas
//!
//! This crate contains the note models, the notes service client, and the
//! notes store that keeps an in-memory collection consistent with the
//! service. Presentation layers (the CLI today) sit on top of it.

pub mod api;
pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId, NotePatch};
pub use store::{NotesState, NotesStore, NotesView};
