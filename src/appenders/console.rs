//! Console appender implementation
//!
//! Writes the short line form, colored by level. The terminal's foreground
//! color is process-wide state: [`ColorGuard`] sets it for one write and puts
//! the previous value back when dropped, including on error or unwind.
//! Concurrent writers may still interleave their set/reset pairs.

use crate::core::{Appender, EntryFormatter, LineFormat, LogEntry, LogLevel, LoggerError, Result};
use colored::Color;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Plug-in hook mapping a level to a console color. `None` leaves the color unchanged.
pub type Palette = Arc<dyn Fn(LogLevel) -> Option<Color> + Send + Sync>;

/// Output device with a current foreground color
pub trait Terminal: Send + Sync {
    fn foreground(&self) -> Option<Color>;
    fn set_foreground(&self, color: Option<Color>);
    fn write_line(&self, line: &str) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

static STDOUT_FOREGROUND: Mutex<Option<Color>> = parking_lot::const_mutex(None);

/// Standard output. Escape sequences are only emitted when `colored`
/// decides the stream should be colorized (tty, `NO_COLOR`, `CLICOLOR`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTerminal;

impl Terminal for StdoutTerminal {
    fn foreground(&self) -> Option<Color> {
        *STDOUT_FOREGROUND.lock()
    }

    fn set_foreground(&self, color: Option<Color>) {
        *STDOUT_FOREGROUND.lock() = color;

        if !colored::control::SHOULD_COLORIZE.should_colorize() {
            return;
        }
        let mut out = io::stdout().lock();
        let _ = match color {
            Some(color) => write!(out, "\x1b[{}m", color.to_fg_str()),
            None => write!(out, "\x1b[0m"),
        };
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Scoped foreground color. Restores the color observed at creation on drop.
pub struct ColorGuard<'a> {
    terminal: &'a dyn Terminal,
    previous: Option<Color>,
}

impl<'a> ColorGuard<'a> {
    pub fn apply(terminal: &'a dyn Terminal, color: Option<Color>) -> Self {
        let previous = terminal.foreground();
        if color.is_some() && color != previous {
            terminal.set_foreground(color);
        }
        Self { terminal, previous }
    }
}

impl Drop for ColorGuard<'_> {
    fn drop(&mut self) {
        if self.terminal.foreground() != self.previous {
            self.terminal.set_foreground(self.previous);
        }
    }
}

pub struct ConsoleAppender {
    terminal: Arc<dyn Terminal>,
    use_colors: bool,
    show_source: bool,
    palette: Palette,
    formatter: Option<EntryFormatter>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_terminal(Arc::new(StdoutTerminal))
    }

    /// Write through a custom terminal
    pub fn with_terminal(terminal: Arc<dyn Terminal>) -> Self {
        Self {
            terminal,
            use_colors: true,
            show_source: false,
            palette: Arc::new(|level: LogLevel| level.color()),
            formatter: None,
        }
    }

    /// Toggle level colors. When off, lines keep the ambient color.
    #[must_use = "builder methods return a new value"]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Include the call-site location in each line when the entry carries one
    #[must_use]
    pub fn show_source(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }

    /// Replace the default level colors
    ///
    /// # Example
    ///
    /// ```
    /// use simple_logging_system::appenders::ConsoleAppender;
    /// use simple_logging_system::LogLevel;
    /// use colored::Color;
    /// use std::sync::Arc;
    ///
    /// let appender = ConsoleAppender::new().with_palette(Arc::new(|level| match level {
    ///     LogLevel::Error => Some(Color::BrightRed),
    ///     _ => None,
    /// }));
    /// ```
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the short line layout
    #[must_use]
    pub fn with_formatter(mut self, formatter: EntryFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    fn render(&self, entry: &LogEntry) -> String {
        match self.formatter {
            Some(ref formatter) => formatter(entry),
            None => LineFormat::Short.format_short(entry, self.show_source),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        let line = self.render(entry);
        let color = if self.use_colors {
            (self.palette)(entry.level)
        } else {
            None
        };

        let _guard = ColorGuard::apply(self.terminal.as_ref(), color);
        self.terminal.write_line(&line).map_err(|e| {
            LoggerError::io_operation("writing to console", format!("{} entry dropped", entry.level), e)
        })
    }

    fn flush(&self) -> Result<()> {
        self.terminal.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    const WRITE_OK: u8 = 0;
    const WRITE_ERR: u8 = 1;
    const WRITE_PANIC: u8 = 2;

    #[derive(Default)]
    struct MockTerminal {
        color: Mutex<Option<Color>>,
        lines: Mutex<Vec<(Option<Color>, String)>>,
        mode: AtomicU8,
    }

    impl Terminal for MockTerminal {
        fn foreground(&self) -> Option<Color> {
            *self.color.lock()
        }

        fn set_foreground(&self, color: Option<Color>) {
            *self.color.lock() = color;
        }

        fn write_line(&self, line: &str) -> io::Result<()> {
            match self.mode.load(Ordering::SeqCst) {
                WRITE_ERR => Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
                WRITE_PANIC => panic!("terminal went away"),
                _ => {
                    let color = self.foreground();
                    self.lines.lock().push((color, line.to_string()));
                    Ok(())
                }
            }
        }
    }

    fn appender() -> (Arc<MockTerminal>, ConsoleAppender) {
        let terminal = Arc::new(MockTerminal::default());
        let appender = ConsoleAppender::with_terminal(terminal.clone());
        (terminal, appender)
    }

    #[test]
    fn test_writes_in_level_color() {
        let (terminal, appender) = appender();

        appender.append(&LogEntry::new(LogLevel::Warn, "low disk")).unwrap();
        appender.append(&LogEntry::new(LogLevel::Error, "crash")).unwrap();
        appender.append(&LogEntry::new(LogLevel::Ann, "ready")).unwrap();
        appender.append(&LogEntry::new(LogLevel::Info, "plain")).unwrap();

        let lines = terminal.lines.lock();
        assert_eq!(lines[0].0, Some(Color::Yellow));
        assert_eq!(lines[1].0, Some(Color::Red));
        assert_eq!(lines[2].0, Some(Color::Cyan));
        assert_eq!(lines[3].0, None);
        assert!(lines[0].1.ends_with("(Warn) low disk"));
        assert_eq!(terminal.foreground(), None);
    }

    #[test]
    fn test_info_keeps_ambient_color() {
        let (terminal, appender) = appender();
        terminal.set_foreground(Some(Color::Green));

        appender.append(&LogEntry::new(LogLevel::Info, "plain")).unwrap();
        appender.append(&LogEntry::new(LogLevel::Error, "crash")).unwrap();

        let lines = terminal.lines.lock();
        assert_eq!(lines[0].0, Some(Color::Green));
        assert_eq!(lines[1].0, Some(Color::Red));
        assert_eq!(terminal.foreground(), Some(Color::Green));
    }

    #[test]
    fn test_color_restored_after_write_error() {
        let (terminal, appender) = appender();
        terminal.set_foreground(Some(Color::Magenta));
        terminal.mode.store(WRITE_ERR, Ordering::SeqCst);

        let result = appender.append(&LogEntry::new(LogLevel::Error, "crash"));

        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
        assert_eq!(terminal.foreground(), Some(Color::Magenta));
    }

    #[test]
    fn test_color_restored_after_write_panic() {
        let (terminal, appender) = appender();
        terminal.mode.store(WRITE_PANIC, Ordering::SeqCst);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(&LogEntry::new(LogLevel::Warn, "low disk"))
        }));

        assert!(result.is_err());
        assert_eq!(terminal.foreground(), None);
    }

    #[test]
    fn test_colors_disabled() {
        let terminal = Arc::new(MockTerminal::default());
        let appender = ConsoleAppender::with_terminal(terminal.clone()).with_colors(false);

        appender.append(&LogEntry::new(LogLevel::Error, "crash")).unwrap();
        assert_eq!(terminal.lines.lock()[0].0, None);
    }

    #[test]
    fn test_custom_palette_and_formatter() {
        let terminal = Arc::new(MockTerminal::default());
        let appender = ConsoleAppender::with_terminal(terminal.clone())
            .with_palette(Arc::new(|_| Some(Color::Blue)))
            .with_formatter(Arc::new(|entry: &LogEntry| format!("{}!", entry.message)));

        appender.append(&LogEntry::new(LogLevel::Info, "hi")).unwrap();

        assert_eq!(terminal.lines.lock()[0], (Some(Color::Blue), "hi!".to_string()));
    }

    #[test]
    fn test_show_source() {
        let (terminal, appender) = appender();
        let appender = appender.show_source(true);

        let entry = LogEntry::new(LogLevel::Info, "boot")
            .with_module("core")
            .with_source("src/main.rs:3");
        appender.append(&entry).unwrap();

        assert!(terminal.lines.lock()[0].1.ends_with("(Info) [core] src/main.rs:3 boot"));
    }
}
