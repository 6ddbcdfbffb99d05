//! CLI command definitions and dispatch for the `legado` binary.
//!
//! Uses clap derive macros for argument parsing. The interactive chat
//! loop is the main surface; `chats` and `delete` mirror the sidebar
//! controls for scripting.

pub mod chat;
pub mod chats;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Asistente legal sobre herencia en Perú, en tu terminal.
#[derive(Parser)]
#[command(name = "legado", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat.
    Chat,

    /// List your chats.
    #[command(alias = "ls")]
    Chats,

    /// Delete a chat by its position in the list.
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `legado chats` (1-based).
        index: usize,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
