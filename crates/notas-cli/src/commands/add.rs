use notas_core::editor::{NoteEditor, RichContent};
use notas_core::NoteDraft;

use crate::commands::common::{read_piped_stdin, save_request, CommandContext};
use crate::commands::editor::ExternalEditor;
use crate::error::CliError;

pub async fn run_add(
    ctx: &CommandContext,
    title: String,
    body: Option<String>,
    completed: bool,
) -> Result<(), CliError> {
    // Fail on a blank title before asking for a body.
    NoteDraft::new(title.as_str(), "", completed).validate()?;

    let mut content = ExternalEditor::default();
    match body {
        Some(body) => content.set_content(&body),
        None => match read_piped_stdin()? {
            Some(piped) => content.set_content(&piped),
            None => content.edit_interactively()?,
        },
    }

    let mut editor = NoteEditor::new_note(content);
    editor.title = title;
    editor.completed = completed;
    let request = editor.to_request()?;

    let store = ctx.open_store()?;
    let note = save_request(&store, request).await?;
    println!("{}", note.id);
    Ok(())
}
