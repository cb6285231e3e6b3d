//! `$EDITOR`-backed implementation of the rich content capability.

use std::env;
use std::io::Write;
use std::process::Command;

use notas_core::editor::RichContent;
use tempfile::Builder;

use crate::error::CliError;

const FALLBACK_EDITOR: &str = if cfg!(windows) { "notepad" } else { "vi" };

/// Note body edited through an external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalEditor {
    content: String,
}

impl ExternalEditor {
    /// Open the body markup in `$VISUAL`/`$EDITOR` and keep what the user saves.
    pub fn edit_interactively(&mut self) -> Result<(), CliError> {
        let command_line = resolve_editor(env::var("VISUAL").ok(), env::var("EDITOR").ok());
        self.edit_with(&command_line)
    }

    /// Run `command_line` on a temporary `.html` copy of the body. The
    /// command may carry arguments, e.g. `code --wait`.
    pub fn edit_with(&mut self, command_line: &str) -> Result<(), CliError> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| CliError::EditorFailed("empty editor command".to_string()))?;

        let mut file = Builder::new()
            .prefix("notas-note-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(self.content.as_bytes())?;
        file.flush()?;
        // Close our handle so the editor can replace the file; removed on drop.
        let path = file.into_temp_path();

        let status = Command::new(program).args(parts).arg(path.as_os_str()).status()?;
        if !status.success() {
            return Err(CliError::EditorFailed(format!(
                "`{command_line}` exited with status {status}"
            )));
        }

        let edited = std::fs::read_to_string(&*path)?;
        self.content = edited.trim_end().to_string();
        Ok(())
    }
}

impl RichContent for ExternalEditor {
    fn set_content(&mut self, html: &str) {
        html.clone_into(&mut self.content);
    }

    fn content(&self) -> String {
        self.content.clone()
    }
}

/// First non-blank of `$VISUAL` then `$EDITOR`, else the platform editor.
pub fn resolve_editor(visual: Option<String>, editor: Option<String>) -> String {
    [visual, editor]
        .into_iter()
        .flatten()
        .map(|command| command.trim().to_string())
        .find(|command| !command.is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}
