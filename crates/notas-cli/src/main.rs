//! Notas CLI - Command-line client for a remote notes service
//!
//! Sign in, then list, write, edit and delete notes from the terminal.

mod auth;
mod cli;
mod commands;
mod config_profiles;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::auth_cmd::{run_login, run_logout, run_register, run_status};
use crate::commands::common::CommandContext;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    // Command output goes to stdout; keep diagnostics on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("notas=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Config { command } => run_config(command, profile)?,
        command => {
            let ctx = CommandContext::resolve(cli.api_url, profile)?;
            dispatch(&ctx, command).await?;
        }
    }

    Ok(())
}

async fn dispatch(ctx: &CommandContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Register { email, password } => run_register(ctx, &email, &password).await,
        Commands::Login { email, password } => run_login(ctx, &email, &password).await,
        Commands::Logout => run_logout(ctx),
        Commands::Status => run_status(ctx),
        Commands::List { json } => run_list(ctx, json).await,
        Commands::Add {
            title,
            body,
            completed,
        } => run_add(ctx, title, body, completed).await,
        Commands::Edit {
            id,
            title,
            body,
            completed,
        } => run_edit(ctx, &id, title, body, completed).await,
        Commands::Delete { id } => run_delete(ctx, &id).await,
        Commands::Config { .. } => Ok(()),
    }
}
