use std::io;

use notas_core::NoteId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] notas_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Note ID must be a number, got '{0}'")]
    InvalidNoteId(String),
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Could not load notes: {0}")]
    Load(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
