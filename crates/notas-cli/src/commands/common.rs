use std::env;
use std::io::{self, IsTerminal, Read};

use chrono::DateTime;
use notas_core::api::HttpNotesClient;
use notas_core::editor::EditorRequest;
use notas_core::models::PREVIEW_MAX_CHARS;
use notas_core::{Note, NoteId, NotesStore};
use serde::Serialize;

use crate::auth::KeyringSessionStore;
use crate::config_profiles::{CliProfile, CliProfilesConfig, API_URL_ENV_VAR};
use crate::error::CliError;

pub type CliNotesClient = HttpNotesClient<KeyringSessionStore>;
pub type CliNotesStore = NotesStore<CliNotesClient>;

const TITLE_COLUMN_WIDTH: usize = 32;
const PREVIEW_COLUMN_WIDTH: usize = 60;

/// Profile and endpoint overrides a command runs against.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub profile_name: String,
    pub profile: CliProfile,
    api_url: Option<String>,
}

impl CommandContext {
    pub fn resolve(api_url: Option<String>, profile: Option<&str>) -> Result<Self, CliError> {
        let config = CliProfilesConfig::load().map_err(CliError::Config)?;
        let profile_name = config.resolve_profile_name(profile);
        let profile = config.profile(&profile_name).cloned().unwrap_or_default();
        Ok(Self::new(profile_name, profile, api_url))
    }

    pub const fn new(profile_name: String, profile: CliProfile, api_url: Option<String>) -> Self {
        Self {
            profile_name,
            profile,
            api_url,
        }
    }

    pub fn sessions(&self) -> KeyringSessionStore {
        KeyringSessionStore::for_profile(&self.profile_name)
    }

    pub fn client(&self) -> Result<CliNotesClient, CliError> {
        let config = self
            .profile
            .service_config(self.api_url.clone(), env::var(API_URL_ENV_VAR).ok())?;
        Ok(HttpNotesClient::new(config, self.sessions())?)
    }

    pub fn open_store(&self) -> Result<CliNotesStore, CliError> {
        Ok(NotesStore::new(self.client()?))
    }

    /// Open a store and load it, failing when the load records an error.
    pub async fn loaded_store(&self) -> Result<CliNotesStore, CliError> {
        let store = self.open_store()?;
        store.load().await;
        if let Some(message) = store.snapshot().error() {
            return Err(CliError::Load(message.to_string()));
        }
        Ok(store)
    }
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub title: String,
    pub preview: String,
    pub body: String,
    pub completed: bool,
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.get(),
        title: note.title.clone(),
        preview: note.preview(PREVIEW_MAX_CHARS),
        body: note.body.clone(),
        completed: note.completed,
    }
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let marker = if note.completed { "[x]" } else { "[ ]" };
            let title = truncate_with_ellipsis(&note.title, TITLE_COLUMN_WIDTH);
            let preview = truncate_with_ellipsis(
                &note.preview(PREVIEW_MAX_CHARS),
                PREVIEW_COLUMN_WIDTH,
            );

            if preview.is_empty() {
                format!("{:>5}  {marker} {title}", note.id.get())
            } else {
                format!(
                    "{:>5}  {marker} {title:<width$}  {preview}",
                    note.id.get(),
                    width = TITLE_COLUMN_WIDTH
                )
            }
        })
        .collect()
}

pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn parse_note_id(raw: &str) -> Result<NoteId, CliError> {
    raw.parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(raw.trim().to_string()))
}

pub fn format_timestamp(timestamp_secs: i64) -> String {
    DateTime::from_timestamp(timestamp_secs, 0).map_or_else(
        || timestamp_secs.to_string(),
        |date_time| date_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

/// Send the editor's request through the store.
pub async fn save_request(store: &CliNotesStore, request: EditorRequest) -> Result<Note, CliError> {
    let note = match request {
        EditorRequest::Create(draft) => store.create(draft).await?,
        EditorRequest::Update(id, patch) => store.update(id, patch).await?,
    };
    Ok(note)
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim_end();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
