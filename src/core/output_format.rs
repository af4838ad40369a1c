//! Line formats for log entries
//!
//! Two text layouts are provided:
//! - Short: compact console line, `14:02 (Warn) [net] link down`
//! - Detailed: file line with full time and date,
//!   `14:02:31 2025-01-08 (Warn): [net] link down`
//!
//! Sinks accept any [`EntryFormatter`] in place of these.

use super::log_entry::LogEntry;
use std::sync::Arc;

/// Plug-in hook that renders an entry to a single line (no trailing newline)
pub type EntryFormatter = Arc<dyn Fn(&LogEntry) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineFormat {
    /// `<HH:MM> (<level>) [<module>] <message>`
    #[default]
    Short,

    /// `<HH:MM:SS> <YYYY-MM-DD> (<level>): [<module>] <message>`
    Detailed,
}

impl LineFormat {
    pub fn format(&self, entry: &LogEntry) -> String {
        match self {
            LineFormat::Short => self.format_short(entry, false),
            LineFormat::Detailed => self.format_detailed(entry),
        }
    }

    /// Short form, optionally including the call-site location
    pub fn format_short(&self, entry: &LogEntry, show_source: bool) -> String {
        let mut line = format!("{} ({})", entry.timestamp.format("%H:%M"), entry.level);
        push_tags(&mut line, entry, show_source);
        line.push_str(&entry.message);
        line
    }

    fn format_detailed(&self, entry: &LogEntry) -> String {
        let mut line = format!(
            "{} {} ({}):",
            entry.timestamp.format("%H:%M:%S"),
            entry.timestamp.format("%Y-%m-%d"),
            entry.level
        );
        push_tags(&mut line, entry, true);
        line.push_str(&entry.message);
        line
    }

    /// Wrap this layout as a formatter hook
    pub fn formatter(self) -> EntryFormatter {
        Arc::new(move |entry| self.format(entry))
    }
}

fn push_tags(line: &mut String, entry: &LogEntry, show_source: bool) {
    line.push(' ');
    if let Some(ref module) = entry.module {
        line.push('[');
        line.push_str(module);
        line.push_str("] ");
    }
    if show_source {
        if let Some(ref source) = entry.source {
            line.push_str(source);
            line.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use chrono::{Local, TimeZone};

    fn entry_at(level: LogLevel, message: &str) -> LogEntry {
        let mut entry = LogEntry::new(level, message);
        entry.timestamp = Local
            .with_ymd_and_hms(2025, 1, 8, 14, 2, 31)
            .single()
            .expect("unambiguous local time");
        entry
    }

    #[test]
    fn test_short_without_module() {
        let entry = entry_at(LogLevel::Info, "starting");
        assert_eq!(LineFormat::Short.format(&entry), "14:02 (Info) starting");
    }

    #[test]
    fn test_short_with_module() {
        let entry = entry_at(LogLevel::Warn, "link down").with_module("net");
        assert_eq!(LineFormat::Short.format(&entry), "14:02 (Warn) [net] link down");
    }

    #[test]
    fn test_short_source_is_opt_in() {
        let entry = entry_at(LogLevel::Ann, "ready").with_source("src/main.rs:7");
        assert_eq!(LineFormat::Short.format(&entry), "14:02 (Ann) ready");
        assert_eq!(
            LineFormat::Short.format_short(&entry, true),
            "14:02 (Ann) src/main.rs:7 ready"
        );
    }

    #[test]
    fn test_detailed() {
        let entry = entry_at(LogLevel::Error, "crash").with_module("core");
        assert_eq!(
            LineFormat::Detailed.format(&entry),
            "14:02:31 2025-01-08 (Error): [core] crash"
        );

        let entry = entry_at(LogLevel::Info, "boot").with_source("src/lib.rs:1");
        assert_eq!(
            LineFormat::Detailed.format(&entry),
            "14:02:31 2025-01-08 (Info): src/lib.rs:1 boot"
        );
    }

    #[test]
    fn test_formatter_hook() {
        let formatter = LineFormat::Detailed.formatter();
        let entry = entry_at(LogLevel::Warn, "low disk");
        assert_eq!(formatter(&entry), LineFormat::Detailed.format(&entry));
    }
}
