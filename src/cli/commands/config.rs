use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::config_file);

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let mut shown = cfg.clone();
            if shown.password.is_some() {
                shown.password = Some("********".into());
            }
            println!("{}", shown.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `chorelog init` first",
                    path.display()
                )));
            }

            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&requested, &path) {
                success(format!("Configuration edited using '{}'", requested));
            } else {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, fallback
                ));
                if run_editor(&fallback, &path) {
                    success(format!("Configuration edited using fallback '{}'", fallback));
                } else {
                    error(format!("Failed to edit configuration using '{}'", fallback));
                }
            }
        }
    }

    Ok(())
}
