//! Console feedback helpers. Every user-facing status line goes through here
//! so icons and colors stay consistent across commands.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn line<T: fmt::Display>(tone: Tone, msg: T) -> String {
    format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Success, msg));
}

/// Warnings go to stderr so they never mix with table output.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Tone::Error, msg));
}

/// Section header, e.g. above a table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}== {} =={}\n", Tone::Info.color(), BOLD, msg, RESET);
}
