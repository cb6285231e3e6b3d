use notas_core::editor::{NoteEditor, RichContent};

use crate::commands::common::{parse_note_id, save_request, CommandContext};
use crate::commands::editor::ExternalEditor;
use crate::error::CliError;

pub async fn run_edit(
    ctx: &CommandContext,
    id: &str,
    title: Option<String>,
    body: Option<String>,
    completed: Option<bool>,
) -> Result<(), CliError> {
    let id = parse_note_id(id)?;
    let store = ctx.loaded_store().await?;
    let note = store.find(id).ok_or(CliError::NoteNotFound(id))?;

    let interactive = title.is_none() && body.is_none() && completed.is_none();
    let mut editor = NoteEditor::edit(ExternalEditor::default(), &note);
    if let Some(title) = title {
        editor.title = title;
    }
    if let Some(completed) = completed {
        editor.completed = completed;
    }
    if let Some(body) = body {
        editor.content_handle_mut().set_content(&body);
    } else if interactive {
        editor.content_handle_mut().edit_interactively()?;
    }

    let request = editor.to_request()?;
    let updated = save_request(&store, request).await?;
    println!("{}", updated.id);
    Ok(())
}
