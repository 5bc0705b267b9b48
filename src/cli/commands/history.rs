use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::core::submit::fetch_or_empty;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::models::LogId;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit } = cmd {
        let mut pool = open_store(cfg.database_path())?;
        let rows = fetch_or_empty(&mut pool, LogId::Primary);

        if rows.is_empty() {
            info("No entries in the log yet.");
            return Ok(());
        }

        let limit = limit.unwrap_or(cfg.history_limit);
        let latest = HistoryLogic::latest(&rows, limit);

        header(format!(
            "Latest {} of {} entries (all chores)",
            latest.len(),
            rows.len()
        ));
        print!("{}", HistoryLogic::render(latest));
    }
    Ok(())
}
