use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::leaderboard::LeaderboardLogic;
use crate::core::submit::fetch_or_empty;
use crate::db::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::LogId;
use crate::ui::messages::{header, info};
use crate::utils::time::now_in_zone;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leaderboard { chore, period } = cmd {
        let chore = match chore {
            Some(c) => c.clone(),
            None => cfg
                .chores
                .first()
                .cloned()
                .ok_or_else(|| AppError::Config("no chores configured".into()))?,
        };

        let mut pool = open_store(cfg.database_path())?;
        let rows = fetch_or_empty(&mut pool, LogId::Primary);
        let now = now_in_zone(&cfg.timezone)?;

        let standings = LeaderboardLogic::rank(&rows, &chore, *period, now);
        if standings.is_empty() {
            info(format!(
                "No entries for '{}' in the selected period ({}).",
                chore,
                period.label()
            ));
            return Ok(());
        }

        header(format!("🏆 Leaderboard - {} ({})", chore, period.label()));
        print!("{}", LeaderboardLogic::render(&standings));
    }
    Ok(())
}
