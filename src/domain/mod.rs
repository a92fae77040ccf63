//! Core domain types for BLADE

mod history;

pub use history::{HistoryEntry, HistoryKind, HistorySink};
