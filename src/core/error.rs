//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The log directory could not be created at construction time
    #[error("Failed to create log directory '{path}': {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Batched write to the log file failed
    #[error("Failed to append {entries} entries to '{path}': {source}")]
    FileWrite {
        path: String,
        entries: usize,
        #[source]
        source: std::io::Error,
    },

    /// Queue reported fewer entries than its length promised
    #[error("Log queue inconsistent: expected {expected} entries, received {received}")]
    QueueInconsistent { expected: usize, received: usize },

    /// Logger already stopped
    #[error("Logger already stopped")]
    LoggerStopped,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Channel send error
    #[error("Failed to send log entry to the file queue")]
    ChannelSendError,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a directory creation error
    pub fn directory(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a batched file write error
    pub fn file_write(path: impl Into<String>, entries: usize, source: std::io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            entries,
            source,
        }
    }

    /// Create a queue inconsistency error
    pub fn queue_inconsistent(expected: usize, received: usize) -> Self {
        LoggerError::QueueInconsistent { expected, received }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
