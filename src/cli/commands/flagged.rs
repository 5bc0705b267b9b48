use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::core::submit::fetch_or_empty;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::models::LogId;
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Flagged) {
        let mut pool = open_store(cfg.database_path())?;
        let rows = fetch_or_empty(&mut pool, LogId::Flagged);

        if rows.is_empty() {
            success("Everyone is honest! Nobody has been flagged yet. 😇");
            return Ok(());
        }

        header(format!("🤥 Flagged claims ({})", rows.len()));
        print!("{}", HistoryLogic::render(&rows));
    }
    Ok(())
}
