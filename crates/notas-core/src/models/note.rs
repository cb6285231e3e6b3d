//! Note model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Preview length used by note lists.
pub const PREVIEW_MAX_CHARS: usize = 200;

/// Server-assigned note identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note as last confirmed by the notes service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier
    pub id: NoteId,
    /// Title shown in lists
    #[serde(rename = "titulo")]
    pub title: String,
    /// Rich text body as HTML-like markup
    #[serde(rename = "descripcion", default)]
    pub body: String,
    /// Completion flag
    #[serde(rename = "completada", default)]
    pub completed: bool,
}

impl Note {
    /// Replace every mutable field with the patch values. The id never changes.
    pub fn apply(&mut self, patch: &NotePatch) {
        self.title.clone_from(&patch.title);
        self.body.clone_from(&patch.body);
        self.completed = patch.completed;
    }

    /// Plain-text preview of the body, truncated to `max_chars` characters
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        strip_markup(&self.body).chars().take(max_chars).collect()
    }
}

/// User-supplied fields for a note that has no identity yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub body: String,
    #[serde(rename = "completada")]
    pub completed: bool,
}

impl NoteDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            completed,
        }
    }

    /// Reject drafts whose title is blank after trimming.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }

    /// Copy of this draft with surrounding whitespace removed from the title.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            ..self.clone()
        }
    }
}

/// Full replacement set of mutable fields for an existing note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub body: String,
    #[serde(rename = "completada")]
    pub completed: bool,
}

impl NotePatch {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            completed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

impl From<&Note> for NotePatch {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            body: note.body.clone(),
            completed: note.completed,
        }
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation("Note title is required".to_string()));
    }
    Ok(())
}

/// Strip markup tags and collapse whitespace into a single-line plain text.
///
/// # Examples
///
/// ```
/// use notas_core::models::strip_markup;
///
/// assert_eq!(strip_markup("<p>milk</p><p>eggs</p>"), "milkeggs");
/// assert_eq!(strip_markup("<b>bold</b>   text"), "bold text");
/// ```
#[must_use]
pub fn strip_markup(text: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));
    tag.replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
