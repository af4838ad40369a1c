//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ColorGuard, ConsoleAppender, Palette, StdoutTerminal, Terminal};
pub use file::{ErrorReporter, FileAppender, FileAppenderBuilder};

pub use crate::core::Appender;
