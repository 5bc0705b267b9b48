use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_quietly;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = open_store(cfg.database_path())?;
        let count = ExportLogic::export(&mut pool, *format, file, *force)?;
        audit_quietly(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{count} entries to {file}"),
        );
    }
    Ok(())
}
