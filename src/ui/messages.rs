//! Console progress lines: one coloured marker per level, errors on stderr.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[36m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Level::Info => "•",
            Level::Success => "✔",
            Level::Warning => "!",
            Level::Error => "✘",
        }
    }

    fn paint<T: fmt::Display>(self, msg: T) -> String {
        format!("{}{}{}{} {}", self.color(), BOLD, self.marker(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.paint(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.paint(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.paint(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.paint(msg));
}

fn banner(title: &str) -> String {
    let rule = "─".repeat(title.chars().count());
    format!("{BOLD}{title}\n{rule}{RESET}")
}

/// Title of the run, underlined to its own width.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", banner(&msg.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_puts_marker_before_message() {
        let l = Level::Success.paint("Chart written: 2016_games_per_month.png");
        assert!(l.starts_with(Level::Success.color()));
        assert!(l.contains(Level::Success.marker()));
        assert!(l.ends_with(" Chart written: 2016_games_per_month.png"));
    }

    #[test]
    fn test_banner_rule_matches_title_width() {
        let b = banner("XonStat charts for 2016");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("XonStat charts for 2016"));
        assert!(lines[1].starts_with(&"─".repeat(23)));
    }
}
