//! chorelog library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (submission workflow, log stores, views, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::gate::AccessGate;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.command.is_open() {
        AccessGate::check(cfg, cli.password.as_deref())?;
    }

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
        Commands::Submit { .. } => cli::commands::submit::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Leaderboard { .. } => cli::commands::leaderboard::handle(&cli.command, cfg),
        Commands::Flagged => cli::commands::flagged::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load the configuration once
    let mut cfg = Config::load(cli.config.as_deref())?;

    // command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
