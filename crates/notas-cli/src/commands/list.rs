use notas_core::NotesView;

use crate::commands::common::{format_note_lines, note_to_list_item, CommandContext, NoteListItem};
use crate::error::CliError;

pub async fn run_list(ctx: &CommandContext, as_json: bool) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    store.load().await;
    let state = store.snapshot();

    match state.view() {
        NotesView::Loading => println!("Loading notes..."),
        NotesView::Failed(message) => return Err(CliError::Load(message.to_string())),
        NotesView::Empty if as_json => println!("[]"),
        NotesView::Empty => println!("No notes yet. Create one with `notas add --title <TITLE>`."),
        NotesView::Ready(notes) => {
            if as_json {
                let json_items = notes
                    .iter()
                    .map(note_to_list_item)
                    .collect::<Vec<NoteListItem>>();
                println!("{}", serde_json::to_string_pretty(&json_items)?);
            } else {
                for line in format_note_lines(notes) {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
