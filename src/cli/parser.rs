use crate::export::ExportFormat;
use crate::models::Period;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for chorelog
#[derive(Parser)]
#[command(
    name = "chorelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Household chore log: record who did what, flag double claims, keep a leaderboard",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a shared household DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use a configuration file other than ~/.chorelog/chorelog.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Household password, required when one is configured
    #[arg(global = true, long = "password", env = "CHORELOG_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Log a finished chore
    Submit {
        /// Chore that was done
        #[arg(long = "chore")]
        chore: String,

        /// Who did it
        #[arg(long = "name", required_unless_present = "dev")]
        name: Option<String>,

        /// Submit as the configured developer identity
        #[arg(long = "dev", conflicts_with = "name")]
        dev: bool,

        /// Local time of the submission (YYYY-MM-DD HH:MM:SS), defaults to now
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Show the latest entries of the log (all chores)
    History {
        #[arg(long, short, help = "How many entries to show (default from config)")]
        limit: Option<usize>,
    },

    /// Rank performers of one chore
    Leaderboard {
        /// Chore to rank (defaults to the first configured chore)
        #[arg(long = "chore")]
        chore: Option<String>,

        #[arg(long, short, value_enum, default_value = "all")]
        period: Period,
    },

    /// Show the list of flagged double claims
    Flagged,

    /// Export the whole log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

impl Commands {
    /// Commands that work without the household password.
    pub fn is_open(&self) -> bool {
        matches!(self, Commands::Init | Commands::Config { .. })
    }
}
