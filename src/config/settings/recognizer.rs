//! Speech recognizer settings

use serde::{Deserialize, Serialize};

/// External speech recognizer settings
///
/// The recognizer is any program that prints one transcript per line on
/// stdout (for example a streaming whisper wrapper). When `command` is empty,
/// transcripts are read from stdin instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizerSettings {
    /// Recognizer program (looked up on PATH)
    #[serde(default)]
    pub command: String,

    /// Arguments passed to the recognizer program
    #[serde(default)]
    pub args: Vec<String>,
}

impl RecognizerSettings {
    /// The configured program, if any
    pub fn program(&self) -> Option<&str> {
        let command = self.command.trim();
        (!command.is_empty()).then_some(command)
    }
}
