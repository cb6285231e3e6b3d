use crate::commands::common::{parse_note_id, CommandContext};
use crate::error::CliError;

pub async fn run_delete(ctx: &CommandContext, id: &str) -> Result<(), CliError> {
    let id = parse_note_id(id)?;
    let store = ctx.loaded_store().await?;
    if store.find(id).is_none() {
        tracing::debug!("Note {} is not in the loaded list; asking the service anyway", id);
    }

    store.delete(id).await?;
    println!("{id}");
    Ok(())
}
