/// ANSI color helpers for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Palette cycled through by the leaderboard bars.
const BAR_PALETTE: [&str; 5] = [GREEN, CYAN, YELLOW, "\x1b[35m", "\x1b[34m"];

/// Color for the n-th leaderboard bar.
pub fn bar_color(rank: usize) -> &'static str {
    BAR_PALETTE[rank % BAR_PALETTE.len()]
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
