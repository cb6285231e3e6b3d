use notas_core::auth::SessionPersistence;

use crate::commands::common::{format_timestamp, CommandContext};
use crate::error::CliError;

pub async fn run_register(
    ctx: &CommandContext,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let client = ctx.client()?;
    client.register(email, password).await?;
    println!(
        "Registered {}. Sign in with `notas login`.",
        email.trim()
    );
    Ok(())
}

pub async fn run_login(ctx: &CommandContext, email: &str, password: &str) -> Result<(), CliError> {
    let client = ctx.client()?;
    let session = client.login(email, password).await?;
    let email_label = session.email.as_deref().unwrap_or("(no email)");
    println!(
        "Signed in profile '{}' as {email_label}",
        ctx.profile_name
    );
    Ok(())
}

pub fn run_logout(ctx: &CommandContext) -> Result<(), CliError> {
    match ctx.open_store() {
        Ok(store) => store.logout()?,
        // Signing out must work even when no service URL is configured.
        Err(error) => {
            tracing::debug!("Clearing session without a notes store: {}", error);
            ctx.sessions().clear_session()?;
        }
    }
    println!("Signed out profile '{}'", ctx.profile_name);
    Ok(())
}

pub fn run_status(ctx: &CommandContext) -> Result<(), CliError> {
    match ctx.sessions().load_session()? {
        Some(session) => {
            let email_label = session.email.as_deref().unwrap_or("(no email)");
            println!(
                "Profile '{}' is signed in as {} (since {})",
                ctx.profile_name,
                email_label,
                format_timestamp(session.signed_in_at)
            );
        }
        None => println!("Profile '{}' is not signed in.", ctx.profile_name),
    }
    Ok(())
}
