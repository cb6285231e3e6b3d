use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "notas")]
#[command(about = "Write, edit, and organise your Notas notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes service base URL (overrides NOTAS_API_URL and the profile)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// CLI profile name
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account on the notes service
    Register {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password (at least 8 characters)
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Sign in and store the session in the keychain
    Login {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show whether the profile is signed in
    Status,
    /// List notes
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(long)]
        title: String,
        /// Note body markup (opens $EDITOR when omitted)
        #[arg(long)]
        body: Option<String>,
        /// Mark the note as completed
        #[arg(long)]
        completed: bool,
    },
    /// Edit an existing note
    Edit {
        /// Note ID
        id: String,
        /// Replacement title
        #[arg(long)]
        title: Option<String>,
        /// Replacement body markup
        #[arg(long)]
        body: Option<String>,
        /// Replacement completion flag
        #[arg(long, value_name = "BOOL")]
        completed: Option<bool>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID
        id: String,
    },
    /// Configure CLI profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update a profile
    Init {
        /// Notes service base URL
        #[arg(long, value_name = "URL")]
        url: String,
        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
        /// Keep current active profile instead of activating this one
        #[arg(long)]
        no_activate: bool,
    },
    /// Print the resolved profile configuration
    Show,
}
