use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::chat::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Chat with a keyword-driven portfolio bot")]
#[command(version)]
pub struct Args {
    /// Profile file (defaults to ~/.config/folio/profile.toml, then the built-in profile)
    #[arg(short = 'p', long, global = true)]
    pub profile: Option<PathBuf>,

    /// Suppress status messages and the typing indicator
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat {
        /// Reply immediately instead of simulating typing
        #[arg(long)]
        fast: bool,

        /// Do not ring the terminal bell on replies
        #[arg(long)]
        mute: bool,
    },
    /// Send a single message and print the reply
    Ask {
        /// The message to send
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Replay a script of messages, one per line
    Replay {
        /// Script file (reads from stdin if not provided)
        file: Option<String>,

        /// Milliseconds to wait between messages
        #[arg(short = 'd', long, conflicts_with = "paced")]
        delay: Option<u64>,

        /// Wait the profile's message delay between messages
        #[arg(long)]
        paced: bool,

        /// Print only the transcript, as json or text
        #[arg(short = 'e', long)]
        export: Option<ExportFormat>,
    },
    /// List keywords and their aliases
    Commands,
    /// Manage the profile file
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Write the built-in profile to the profile file
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
    /// Print the active profile as TOML
    Show,
    /// Validate the active profile
    Check,
}
