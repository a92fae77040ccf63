use std::rc::Rc;

use chrono::{DateTime, Local};

/// The kind of history entry shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    /// Output of a command action
    Command,
    /// Lifecycle message (e.g., listening started/stopped)
    System,
    /// Something went wrong (engine error, unsupported host)
    Error,
}

impl std::fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HistoryKind::Command => "command",
            HistoryKind::System => "system",
            HistoryKind::Error => "error",
        };
        f.pad(s)
    }
}

/// A single line of command history
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// When this entry was produced
    pub timestamp: DateTime<Local>,

    /// The kind of entry
    pub kind: HistoryKind,

    /// Message text (may span multiple lines, e.g. the help listing)
    pub message: String,
}

impl HistoryEntry {
    /// Create a new history entry stamped with the current local time
    pub fn new(kind: HistoryKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
        }
    }

    /// Create a command output entry
    pub fn command(message: impl Into<String>) -> Self {
        Self::new(HistoryKind::Command, message)
    }

    /// Create a system entry
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(HistoryKind::System, message)
    }

    /// Create an error entry
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(HistoryKind::Error, message)
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:<7} {}",
            self.timestamp.format("%H:%M:%S"),
            self.kind,
            self.message
        )
    }
}

/// Receiver for history entries produced by command actions.
///
/// The dispatcher never stores history; whoever presents it supplies the sink.
pub type HistorySink = Rc<dyn Fn(HistoryEntry)>;
