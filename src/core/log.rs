use crate::db::log::{AuditEntry, load_audit};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

/// Widest `operation (target)` column before truncation.
const OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// Color of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "submit" => Colour::Green,
        "flagged" => Colour::Red,
        "submit_failed" => Colour::Yellow,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

/// One printable line; the operation word is colored, the target is not.
pub fn format_entry(e: &AuditEntry, id_w: usize, date_w: usize) -> String {
    let op_target = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };
    let visible = truncate(&op_target, OP_WIDTH);

    let color = color_for_operation(&e.operation);
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };
    let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id,
        e.date,
        colored,
        padding,
        e.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_audit(&pool.conn)?;
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", format_entry(e, id_w, date_w));
        }

        Ok(())
    }
}
