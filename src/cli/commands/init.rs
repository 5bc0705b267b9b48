use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_quietly;
use crate::db::open_store;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database with both chore logs
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.config.as_deref(), cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing chorelog…");
    println!("🗄️  Database   : {}", db_path.display());

    let pool = open_store(&db_path)?;

    audit_quietly(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 chorelog initialization completed!");
    Ok(())
}
